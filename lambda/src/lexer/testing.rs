//! Assertion macro for the nom-based token recognizers.

#[macro_export]
macro_rules! assert_kind {
  ($result:expr, $kind:expr) => {
    match $result {
      | Ok((_, kind)) => assert_eq!(kind, $kind),
      | Err(error) => panic!("unexpected lexing failure: {:?}", error),
    }
  };
}
