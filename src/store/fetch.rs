/// Lifecycle of one fetched value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fetch<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Fetch::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(message) => Some(message),
            _ => None,
        }
    }
}
