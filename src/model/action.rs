/// What a line of menu input resolves to.
/// `Select` holds a zero-based index (the menus are displayed one-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(usize),
    Back,
    Quit,
    Invalid,
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s.trim() {
            "b" | "B" => Action::Back,
            "q" | "Q" => Action::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => Action::Select(n - 1),
                _ => Action::Invalid,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(Action::from("1"), Action::Select(0));
        assert_eq!(Action::from("7"), Action::Select(6));
        assert_eq!(Action::from("99"), Action::Select(98));
    }

    #[test]
    fn back_and_quit() {
        assert_eq!(Action::from("b"), Action::Back);
        assert_eq!(Action::from(" Q "), Action::Quit);
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(Action::from(""), Action::Invalid);
        assert_eq!(Action::from("0"), Action::Invalid);
        assert_eq!(Action::from("-3"), Action::Invalid);
        assert_eq!(Action::from("play 5"), Action::Invalid);
    }
}
