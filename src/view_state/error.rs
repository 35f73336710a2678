use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("section registry must contain at least one section")]
    EmptyRegistry,
    #[error("section {0} is registered twice")]
    DuplicateSection(String),
    #[error("no section with id {0}")]
    UnknownSection(String),
    #[error("element {0} is already tracked")]
    DuplicateElement(String),
    #[error("element {0} is not tracked")]
    UnknownElement(String),
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
    #[error("the page is still loading, please try again")]
    NotMounted,
    #[error("invalid view config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Contact(#[from] ContactError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("please enter your name")]
    MissingName,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("please enter a message")]
    MissingMessage,
}
