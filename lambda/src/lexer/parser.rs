use nom::branch::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::multi::*;
use nom::sequence::*;
use nom::IResult;

use super::TokenKind;

pub type ParseResult<'a, T> = IResult<&'a [u8], T>;

// Primitives.

fn lower(input: &[u8]) -> ParseResult<'_, char> {
  one_of("abcdefghijklmnopqrstuvwxyz")(input)
}

fn upper(input: &[u8]) -> ParseResult<'_, char> {
  one_of("ABCDEFGHIJKLMNOPQRSTUVWXYZ")(input)
}

fn letter(input: &[u8]) -> ParseResult<'_, char> {
  alt((lower, upper))(input)
}

// Non-terminals.

pub fn token(input: &[u8]) -> ParseResult<'_, TokenKind> {
  alt((
    arrow,
    identifier,
    left_paren,
    right_paren,
    back_slash,
    dot,
    equals,
    colon,
    semi,
  ))(input)
}

fn identifier(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::Ident, many1(letter))(input)
}

// Terminals.

fn arrow(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::RightArrow, pair(char('-'), char('>')))(input)
}

fn left_paren(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::LeftParen, char('('))(input)
}

fn right_paren(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::RightParen, char(')'))(input)
}

fn back_slash(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::BackSlash, char('\\'))(input)
}

fn dot(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::Dot, char('.'))(input)
}

fn equals(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::Equals, char('='))(input)
}

fn colon(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::Colon, char(':'))(input)
}

fn semi(input: &[u8]) -> ParseResult<'_, TokenKind> {
  value(TokenKind::Semi, char(';'))(input)
}
