/// What the user asked for, decided purely from the message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Empty,
    /// `predict <symbol>` with the symbol token as typed; `None` when it is missing.
    Predict(Option<String>),
    Converse(String),
}

impl ChatCommand {
    pub const PREDICT_KEYWORD: &'static str = "predict";

    pub fn parse(message: Option<&str>) -> Self {
        let Some(message) = message.filter(|m| !m.trim().is_empty()) else {
            return Self::Empty;
        };

        let mut tokens = message.split_whitespace();
        if tokens.next() == Some(Self::PREDICT_KEYWORD) {
            return Self::Predict(tokens.next().map(String::from));
        }

        Self::Converse(message.to_string())
    }
}
