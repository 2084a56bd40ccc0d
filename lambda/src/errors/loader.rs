use super::*;

#[derive(PartialEq, Debug, Clone)]
pub enum LoaderError {
  UnableToRead { path: String },
}

impl Wrappable for LoaderError {
  type Wrapper = LangError;

  fn wrap(self) -> LangError {
    LangError::Loader(self)
  }
}
