//! Text helpers for report labels

/// Uppercase the first character and lowercase the rest.
///
/// Mirrors Python's `str.capitalize`, so `"ideavim"` becomes `"Ideavim"` and
/// `"zSH"` becomes `"Zsh"`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_tool_names() {
        assert_eq!(capitalize("neovim"), "Neovim");
        assert_eq!(capitalize("ideavim"), "Ideavim");
        assert_eq!(capitalize("zsh"), "Zsh");
    }

    #[test]
    fn lowercases_the_tail() {
        assert_eq!(capitalize("aeroSpace"), "Aerospace");
        assert_eq!(capitalize("TMUX"), "Tmux");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(capitalize(""), "");
    }
}
