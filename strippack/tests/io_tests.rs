#[cfg(test)]
mod tests {
    use strippack::entities::{Item, Strip};
    use strippack::io;
    use strippack::io::ext_repr::{ExtItem, ExtSPInstance, ExtSPSolution};
    use strippack::io::svg::{SvgDrawOptions, SvgLayoutTheme, layout_to_svg};
    use strippack::placement::bl_pack;
    use std::time::Duration;
    use test_case::test_case;

    #[test]
    fn parse_text_instance_reads_all_items() {
        let content = "3\n1 10 10\n2 20 5\n3 7 9\n";
        let ext = io::parse_text_instance("three", content).unwrap();

        assert_eq!(ext.name, "three");
        assert_eq!(ext.strip_width, None);
        assert_eq!(
            ext.items,
            vec![
                ExtItem { id: 1, width: 10, height: 10 },
                ExtItem { id: 2, width: 20, height: 5 },
                ExtItem { id: 3, width: 7, height: 9 },
            ]
        );

        let instance = io::import(&ext, 100).unwrap();
        assert_eq!(instance.total_item_qty(), 3);
        assert_eq!(instance.strip.width, 100);
        assert_eq!(instance.item_area(), 100 + 100 + 63);
    }

    #[test]
    fn parse_text_instance_ignores_layout_of_whitespace() {
        let ext = io::parse_text_instance("flat", "2 1 3 4 2 5 6").unwrap();
        assert_eq!(ext.items.len(), 2);
        assert_eq!(ext.items[1], ExtItem { id: 2, width: 5, height: 6 });
    }

    #[test_case(""; "empty file")]
    #[test_case("two\n1 1 1"; "non numeric count")]
    #[test_case("2\n1 10 10\n2 20"; "truncated item")]
    #[test_case("1\n1 ten 10"; "non numeric width")]
    #[test_case("1\n-1 10 10"; "negative id")]
    #[test_case("18446744073709551615 1 2 3"; "item count beyond the content")]
    fn malformed_text_instance_is_rejected(content: &str) {
        assert!(io::parse_text_instance("bad", content).is_err());
    }

    #[test_case(vec![(1, 0, 5)]; "zero width")]
    #[test_case(vec![(1, 5, -2)]; "negative height")]
    #[test_case(vec![(1, 5, 5), (1, 6, 6)]; "duplicate id")]
    #[test_case(vec![(1, 101, 5)]; "wider than strip")]
    #[test_case(vec![]; "no items")]
    fn invalid_instance_is_rejected(items: Vec<(u64, i32, i32)>) {
        let ext = ExtSPInstance {
            name: "invalid".to_string(),
            strip_width: None,
            items: items
                .into_iter()
                .map(|(id, width, height)| ExtItem { id, width, height })
                .collect(),
        };
        assert!(io::import(&ext, 100).is_err());
    }

    #[test]
    fn instance_strip_width_takes_precedence() {
        let ext = ExtSPInstance {
            name: "own width".to_string(),
            strip_width: Some(40),
            items: vec![ExtItem { id: 0, width: 30, height: 5 }],
        };
        let instance = io::import(&ext, 100).unwrap();
        assert_eq!(instance.strip, Strip::new(40).unwrap());
    }

    #[test]
    fn json_instance_without_strip_width() {
        let json = r#"{"name": "json", "items": [{"id": 4, "width": 3, "height": 2}]}"#;
        let ext: ExtSPInstance = serde_json::from_str(json).unwrap();
        assert_eq!(ext.strip_width, None);
        assert_eq!(ext.items[0].id, 4);
    }

    #[test]
    fn text_solution_format() {
        let strip = Strip::new(20).unwrap();
        let items = vec![Item::new(1, 10, 10), Item::new(2, 10, 10), Item::new(3, 10, 10)];
        let layout = bl_pack(&items, strip).unwrap();

        let mut buffer = Vec::new();
        io::write_text_solution(&mut buffer, &layout, "squares.txt", "BL", Duration::from_millis(12))
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "# squares.txt BL 0.75 20 12");
        assert_eq!(lines[1], "1 0 10 10 0");
        assert_eq!(lines[2], "2 10 10 20 0");
        assert_eq!(lines[3], "3 0 20 10 10");
    }

    #[test]
    fn json_solution_matches_layout() {
        let strip = Strip::new(20).unwrap();
        let items = vec![Item::new(5, 10, 4), Item::new(6, 3, 8).rotated()];
        let layout = bl_pack(&items, strip).unwrap();

        let ext = io::export(&layout, Duration::from_millis(1500));
        assert_eq!(ext.height, layout.height());
        assert_eq!(ext.run_time_ms, 1500);
        assert_eq!(ext.placed_items.len(), 2);
        assert!(ext.placed_items[1].rotated);
        assert_eq!(ext.placed_items[1].right - ext.placed_items[1].left, 8);

        let json = serde_json::to_string(&ext).unwrap();
        let parsed: ExtSPSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ext);
    }

    #[test]
    fn sequence_signature_marks_rotations() {
        let items = vec![Item::new(3, 1, 2).rotated(), Item::new(1, 1, 1), Item::new(2, 4, 1)];
        assert_eq!(io::sequence_signature(&items), "R3 1 2");
    }

    #[test]
    fn svg_contains_every_item() {
        let strip = Strip::new(20).unwrap();
        let items = vec![Item::new(1, 10, 10), Item::new(2, 5, 5), Item::new(3, 7, 3)];
        let layout = bl_pack(&items, strip).unwrap();

        let document = layout_to_svg(&layout, SvgDrawOptions::default(), "test");
        let svg = document.to_string();
        for id in [1, 2, 3] {
            assert!(svg.contains(&format!("item_{id}")), "item {id} missing from svg");
        }
        assert!(svg.contains("strip"));
    }

    #[test]
    fn gray_theme_draws_untinted_items() {
        let strip = Strip::new(20).unwrap();
        let items = vec![Item::new(1, 10, 10), Item::new(2, 5, 5), Item::new(3, 7, 3)];
        let layout = bl_pack(&items, strip).unwrap();
        let options = SvgDrawOptions {
            theme: SvgLayoutTheme::GRAY,
            ..SvgDrawOptions::default()
        };

        let svg = layout_to_svg(&layout, options, "gray").to_string();
        let item_fill = format!("\"{}\"", SvgLayoutTheme::GRAY.item_fill);
        assert_eq!(svg.matches(&item_fill).count(), 3);
        assert!(svg.contains(&format!("\"{}\"", SvgLayoutTheme::GRAY.strip_fill)));
    }
}
