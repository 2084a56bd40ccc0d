use crate::errors::ParseError;
use crate::lexer::TokenKind;
use crate::source::Input;
use crate::symbols::Symbol;

/// A rule outcome: a node plus the rest of the stream.
///
/// Three outcomes are distinguished overall. `Ok` is success. An `Err` whose
/// error is [ParseError::is_unmatched] *at the attempt position* means the
/// rule did not match at all and the (persistent) stream is untouched. Any
/// other `Err` means the rule started matching and failed mid-way; exactly
/// one diagnostic describes the failure and callers must propagate it.
pub type Parsed<T> = Result<(T, Input), ParseError>;

pub fn expect(expected: TokenKind, input: Input) -> Result<Input, ParseError> {
  if input.read().kind() == expected {
    Ok(input.next())
  } else {
    Err(ParseError::Expected {
      span: input.span(),
      expected,
      found: input.read(),
    })
  }
}

pub fn expect_ident(input: Input) -> Parsed<Symbol> {
  let token = input.read();

  if token.kind() == TokenKind::Ident {
    Ok((token.symbol, input.next()))
  } else {
    Err(ParseError::ExpectedIdent {
      span: input.span(),
      found: token,
    })
  }
}

/// Runs a rule, classifying its outcome: `Some` on success, `None` when the
/// rule did not match at its first token, and `Err` when it failed mid-way.
pub fn attempt<C, T, F>(context: &mut C, func: &F, input: &Input) -> Result<Option<(T, Input)>, ParseError>
where
  F: Fn(&mut C, Input) -> Parsed<T>,
{
  match func(context, input.clone()) {
    | Ok(pair) => Ok(Some(pair)),
    | Err(error) if error.is_unmatched() && error.span().0 == input.pos() => Ok(None),
    | Err(error) => Err(error),
  }
}

/// `rule rule*`, folded left-associatively through `action`. Stops at the
/// first non-match; an error from `rule` or `action` propagates.
pub fn fold_left1<C, T, F, A>(context: &mut C, func: &F, action: &A, input: Input) -> Parsed<T>
where
  F: Fn(&mut C, Input) -> Parsed<T>,
  A: Fn(&mut C, T, T) -> Result<T, ParseError>,
{
  let (mut acc, mut input) = func(context, input)?;

  while let Some((next, rest)) = attempt(context, func, &input)? {
    acc = action(context, acc, next)?;
    input = rest;
  }

  Ok((acc, input))
}

/// `open rule? close`. Returns `None` for an empty enclosure. A missing
/// `close` is diagnosed against the enclosed rule's display name.
pub fn enclosed<C, T, F>(
  context: &mut C,
  open: TokenKind,
  close: TokenKind,
  func: &F,
  rule: &'static str,
  input: Input,
) -> Parsed<Option<T>>
where
  F: Fn(&mut C, Input) -> Parsed<T>,
{
  let input = expect(open, input)?;

  if input.read().kind() == close {
    return Ok((None, input.next()));
  }

  let (value, input) = func(context, input)?;

  if input.read().kind() == close {
    Ok((Some(value), input.next()))
  } else {
    Err(ParseError::ExpectedClosing {
      span: input.span(),
      close,
      rule,
    })
  }
}

/// `operand (operator operand)*`, folded right-recursively through `action`.
pub fn infix_right<C, T, F, A>(
  context: &mut C,
  operator: TokenKind,
  operand: &F,
  action: &A,
  input: Input,
) -> Parsed<T>
where
  F: Fn(&mut C, Input) -> Parsed<T>,
  A: Fn(&mut C, T, T) -> Result<T, ParseError>,
{
  let (left, input) = operand(context, input)?;

  if input.read().kind() == operator {
    let (right, input) = infix_right(context, operator, operand, action, input.next())?;

    Ok((action(context, left, right)?, input))
  } else {
    Ok((left, input))
  }
}

/// Runs a rule and requires it to consume the whole stream.
pub fn complete<C, T, F>(context: &mut C, func: &F, input: Input) -> Result<T, ParseError>
where
  F: Fn(&mut C, Input) -> Parsed<T>,
{
  let (result, input) = func(context, input)?;

  if input.read().kind() == TokenKind::Eof {
    Ok(result)
  } else {
    Err(ParseError::ExpectedEndOfInput {
      span: input.span(),
      found: input.read(),
    })
  }
}
