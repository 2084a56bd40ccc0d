use super::combinators::{self, Parsed};
use super::context::Context;
use super::types::parse_type;
use crate::ast::TypedExpression;
use crate::errors::ParseError;
use crate::lexer::TokenKind;
use crate::source::Input;

const EXPRESSION: &str = "expression";

/// `expression (';' expression)*`, folded into a right-leaning [Seq] spine.
/// A trailing ';' before end of input is allowed.
///
/// [Seq]: TypedExpression::Seq
pub fn parse_sequence(context: &mut Context, input: Input) -> Parsed<TypedExpression> {
  let (left, input) = parse_expression(context, input)?;

  if input.read().kind() != TokenKind::Semi {
    return Ok((left, input));
  }

  let input = input.next();

  if input.read().kind() == TokenKind::Eof {
    return Ok((left, input));
  }

  let (right, input) = parse_sequence(context, input)?;

  let span = (left.get_span().0, right.get_span().1);
  let ty = right.get_type();

  Ok((
    TypedExpression::Seq(span, ty, Box::new(left), Box::new(right)),
    input,
  ))
}

/// One or more primaries. Juxtaposition is application and associates left;
/// every application is type checked as it is folded.
pub fn parse_expression(context: &mut Context, input: Input) -> Parsed<TypedExpression> {
  combinators::fold_left1(
    context,
    &parse_primary,
    &|_, function, argument| apply(function, argument),
    input,
  )
}

/// Dispatches on the current token; after an identifier one more token of
/// lookahead distinguishes a definition, a declaration, and a reference.
fn parse_primary(context: &mut Context, input: Input) -> Parsed<TypedExpression> {
  match input.read().kind() {
    | TokenKind::Ident => match input.read_ahead(1).kind() {
      | TokenKind::Equals => parse_definition(context, input),
      | TokenKind::Colon => parse_declaration(context, input),
      | _ => parse_reference(context, input),
    },
    | TokenKind::BackSlash => parse_abstraction(context, input),
    | TokenKind::LeftParen => parse_group(context, input),
    | _ => {
      Err(ParseError::ExpectedRule {
        span: input.span(),
        rule: EXPRESSION,
        found: input.read(),
      })
    },
  }
}

fn parse_reference(context: &mut Context, input: Input) -> Parsed<TypedExpression> {
  let span = input.span();
  let (name, input) = combinators::expect_ident(input)?;

  match context.lookup(&name) {
    | Some(var) => {
      let ty = var.ty.clone();

      Ok((TypedExpression::Ref(span, ty, var), input))
    },
    | None => Err(ParseError::UnboundVariable { span, name }),
  }
}

/// `identifier '=' expression`. The definition is not recursive: the name is
/// bound only after its value has been elaborated, with the value's type.
fn parse_definition(context: &mut Context, input: Input) -> Parsed<TypedExpression> {
  let start = input.pos();

  let (name, input) = combinators::expect_ident(input)?;
  let input = combinators::expect(TokenKind::Equals, input)?;
  let (value, input) = parse_expression(context, input)?;

  let ty = value.get_type();
  let var = context.bind(name, ty.clone());
  let span = (start, value.get_span().1);

  Ok((
    TypedExpression::Def(span, ty, var, Box::new(value)),
    input,
  ))
}

/// `identifier ':' type`. Declares the variable into the innermost frame.
fn parse_declaration(context: &mut Context, input: Input) -> Parsed<TypedExpression> {
  let start = input.pos();

  let (name, input) = combinators::expect_ident(input)?;
  let input = combinators::expect(TokenKind::Colon, input)?;
  let (ty, input) = parse_type(context, input)?;

  let var = context.bind(name, ty.clone());
  let span = (start, input.pos_end());

  Ok((TypedExpression::Decl(span, ty, var), input))
}

/// `'\' identifier ':' type '.' expression`. The bound variable lives in a
/// fresh scope frame that covers exactly the body.
fn parse_abstraction(context: &mut Context, input: Input) -> Parsed<TypedExpression> {
  let start = input.pos();

  let input = combinators::expect(TokenKind::BackSlash, input)?;
  let (name, input) = combinators::expect_ident(input)?;
  let input = combinators::expect(TokenKind::Colon, input)?;
  let (ty, input) = parse_type(context, input)?;
  let input = combinators::expect(TokenKind::Dot, input)?;

  let ((var, body), input) = context.scope(|context| {
    let var = context.bind(name, ty.clone());
    let (body, input) = parse_expression(context, input)?;

    Ok(((var, body), input))
  })?;

  let arrow = context.types.arrow(ty, body.get_type());
  let span = (start, body.get_span().1);

  Ok((
    TypedExpression::Abs(span, arrow, var, Box::new(body)),
    input,
  ))
}

fn parse_group(context: &mut Context, input: Input) -> Parsed<TypedExpression> {
  let inner = input.next();

  let (expr, input) = combinators::enclosed(
    context,
    TokenKind::LeftParen,
    TokenKind::RightParen,
    &parse_expression,
    EXPRESSION,
    input,
  )?;

  match expr {
    | Some(expr) => Ok((expr, input)),
    | None => {
      Err(ParseError::ExpectedRule {
        span: inner.span(),
        rule: EXPRESSION,
        found: inner.read(),
      })
    },
  }
}

/// Type checks one application step. The function must have an arrow type
/// whose input matches the argument's type; the result takes the output type.
fn apply(
  function: TypedExpression,
  argument: TypedExpression,
) -> Result<TypedExpression, ParseError> {
  let ty = function.get_type();

  match ty.as_arrow() {
    | Some((input, output)) if *input == argument.get_type() => {
      let output = output.clone();
      let span = (function.get_span().0, argument.get_span().1);

      Ok(TypedExpression::App(
        span,
        output,
        Box::new(function),
        Box::new(argument),
      ))
    },
    | Some((input, _)) => {
      Err(ParseError::ArgumentMismatch {
        span: argument.get_span(),
        expected: input.clone(),
        found: argument.get_type(),
      })
    },
    | None => {
      Err(ParseError::ExpectedArrowType {
        span: function.get_span(),
        ty: ty.clone(),
      })
    },
  }
}
