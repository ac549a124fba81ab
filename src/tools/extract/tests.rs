#[cfg(test)]
mod tests {
    use crate::tools::extract::*;

    fn page(head: &str, body: &str) -> String {
        format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
    }

    #[test]
    fn test_meta_description_wins() {
        let html = page(
            r#"<meta name="description" content="  Cats   on   Solana  ">
               <meta property="og:description" content="OG text about cats">"#,
            r#"<div class="token-description">Structural description text</div>"#,
        );
        let found = extract_description_match(&html, &DescriptionFilter::default()).unwrap();
        assert_eq!(found.text, "Cats on Solana");
        assert_eq!(
            found.source,
            DescriptionSource::Meta {
                key: "description".into()
            }
        );
    }

    #[test]
    fn test_meta_order_falls_through_to_og_and_twitter() {
        let html = page(
            r#"<meta name="twitter:description" content="Twitter card text">
               <meta name="description" content="Default Description">
               <meta property="og:description" content="Open graph text">"#,
            "",
        );
        assert_eq!(extract_description(&html).as_deref(), Some("Open graph text"));

        let html = page(
            r#"<meta name="description" content="">
               <meta name="twitter:description" content="Twitter card text">"#,
            "",
        );
        assert_eq!(extract_description(&html).as_deref(), Some("Twitter card text"));
    }

    #[test]
    fn test_meta_tags_are_lenient_about_ui_words() {
        let html = page(
            r#"<meta name="description" content="Connect wallet and join the cat army">"#,
            "",
        );
        assert_eq!(
            extract_description(&html).as_deref(),
            Some("Connect wallet and join the cat army")
        );
    }

    #[test]
    fn test_time_pattern_in_meta_falls_back_to_selectors() {
        let head = r#"<meta name="description" content="pump.fun token created 3 hours ago">"#;

        let meta_only = page(head, "");
        assert_eq!(extract_description(&meta_only), None);

        let with_body = page(
            head,
            r#"<div class="coin-card"><p class="token-description">A community coin for cat lovers</p></div>"#,
        );
        let found = extract_description_match(&with_body, &DescriptionFilter::default()).unwrap();
        assert_eq!(found.text, "A community coin for cat lovers");
        assert_eq!(
            found.source,
            DescriptionSource::Selector {
                selector: "[class*='description']".into()
            }
        );
    }

    #[test]
    fn test_selectors_are_strict_and_try_every_match() {
        let html = page(
            "",
            r#"<div class="description">Loading...</div>
               <div class="description">Dogs but <b>faster</b></div>"#,
        );
        assert_eq!(extract_description(&html).as_deref(), Some("Dogs but faster"));
    }

    #[test]
    fn test_selector_priority_follows_list_order() {
        let html = page(
            "",
            r#"<main><p>Paragraph inside main content</p></main>
               <section class="about-token">About section text here</section>"#,
        );
        assert_eq!(
            extract_description(&html).as_deref(),
            Some("About section text here")
        );
    }

    #[test]
    fn test_main_paragraph_selector() {
        let html = page(
            "",
            r#"<main><p>5 minutes ago</p><p>Built by frogs, for frogs</p></main>"#,
        );
        assert_eq!(
            extract_description(&html).as_deref(),
            Some("Built by frogs, for frogs")
        );
    }

    #[test]
    fn test_text_block_fallback_skips_noise() {
        let html = page(
            "",
            r#"<nav><span>Home</span><span>Connect wallet</span></nav>
               <div><span>Market cap: $45.2K</span></div>
               <div><span>12 replies</span><span>2 hours ago</span></div>
               <div><span>1,234,567</span></div>
               <script>var description = "not page copy at all";</script>
               <div><div><span>The people's coin for the people's chain</span></div></div>
               <div><span>A later sentence that should not win</span></div>"#,
        );
        let found = extract_description_match(&html, &DescriptionFilter::default()).unwrap();
        assert_eq!(found.text, "The people's coin for the people's chain");
        assert_eq!(found.source, DescriptionSource::TextBlock);
    }

    #[test]
    fn test_text_block_only_considers_leaves() {
        // The outer div has element children, so its combined text is never a candidate.
        let html = page(
            "",
            r#"<div>Wrapper words here <span>tiny</span></div>"#,
        );
        assert_eq!(extract_description(&html), None);
    }

    #[test]
    fn test_no_candidate_returns_none() {
        let html = page(
            r#"<meta name="description" content="just now">"#,
            r#"<span>Buy</span><span>Sell</span><div>24h</div>"#,
        );
        assert_eq!(extract_description(&html), None);
        assert_eq!(extract_description(""), None);
    }

    #[test]
    fn test_length_bounds_are_applied() {
        let html = page(
            r#"<meta name="description" content="Short one">
               <meta property="og:description" content="A much longer description of the coin">"#,
            "",
        );
        let filter = DescriptionFilter {
            min_len: 15,
            max_len: 100,
        };
        assert_eq!(
            extract_description_with(&html, &filter).as_deref(),
            Some("A much longer description of the coin")
        );

        let tight = DescriptionFilter {
            min_len: 0,
            max_len: 5,
        };
        assert_eq!(extract_description_with(&html, &tight), None);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let html = page(
            r#"<meta name="description" content="2 days ago">"#,
            r#"<main><p>Same input, same output, every time</p></main>"#,
        );
        let first = extract_description(&html);
        for _ in 0..5 {
            assert_eq!(extract_description(&html), first);
        }
        assert_eq!(first.as_deref(), Some("Same input, same output, every time"));
    }
}
