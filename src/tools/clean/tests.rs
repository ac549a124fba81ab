#![cfg(test)]
mod tests {
    use crate::tools::clean::*;

    #[test]
    fn test_clean_collapses_page_whitespace() {
        let text = "\n      Community   token\n\n      for   cat lovers\n    ";
        assert_eq!(clean(text), "Community token for cat lovers");
    }

    #[test]
    fn test_clean_strips_invisible_characters() {
        assert_eq!(clean("to\u{200B}the\u{200D} moon"), "tothe moon");
        assert_eq!(clean("\u{FEFF}gm\x07 frens"), "gm frens");
    }

    #[test]
    fn test_clean_tabs_and_newlines_become_spaces() {
        assert_eq!(clean("line1\nline2\tline3"), "line1 line2 line3");
    }

    #[test]
    fn test_clean_unicode_forms_match() {
        assert_eq!(clean("caf\u{00E9}"), clean("cafe\u{0301}"));
    }

    #[test]
    fn test_clean_empty_and_blank() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t  "), "");
        assert_eq!(clean("&nbsp;"), "&nbsp;");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean("  some   \u{200B}text \n here ");
        assert_eq!(clean(&once), once);
    }
}
