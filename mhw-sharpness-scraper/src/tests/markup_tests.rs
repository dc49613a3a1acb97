use super::*;

#[test]
fn parses_quoted_unquoted_and_bare_attributes() {
    let text = r#"<TD Class="b type_0" data-x='1' colspan=2 nowrap>384</td>"#;
    let tag = next_tag(text, 0).unwrap();

    assert_eq!(tag.name, "td");
    assert_eq!(tag.start, 0);
    assert_eq!(tag.attr("class"), Some("b type_0"));
    assert_eq!(tag.attr("data-x"), Some("1"));
    assert_eq!(tag.attr("colspan"), Some("2"));
    assert_eq!(tag.attr("nowrap"), Some(""));
    assert_eq!(content_of(text, &tag), Some("384"));
}

#[test]
fn self_closing_tags_match() {
    let text = r#"before <img src="/img/w.png" class="wp_img" /> after"#;
    let tag = next_tag(text, 0).unwrap();
    assert_eq!(tag.name, "img");
    assert_eq!(tag.start, 7);
    assert_eq!(&text[tag.start..tag.end()], r#"<img src="/img/w.png" class="wp_img" />"#);
}

#[test]
fn closing_tags_are_skipped() {
    let text = "</div></span><b>x</b>";
    let tag = next_tag(text, 0).unwrap();
    assert_eq!(tag.name, "b");
}

#[test]
fn classes_are_deduplicated_in_order() {
    let tag = next_tag(r#"<span class="kr3  b kr3 c_p">"#, 0).unwrap();
    assert_eq!(tag.classes(), vec!["kr3", "b", "c_p"]);
    assert!(tag.has_class("c_p"));
    assert!(!tag.has_class("kr"));
    assert_eq!(tag.class_with_prefix("kr"), Some("kr3"));
}

#[test]
fn tag_without_class_has_no_classes() {
    let tag = next_tag("<td>", 0).unwrap();
    assert!(tag.classes().is_empty());
    assert!(!tag.has_any_class());
    let tag = next_tag(r#"<td class="">"#, 0).unwrap();
    assert!(!tag.has_any_class());
}

#[test]
fn find_advances_cursor_past_match() {
    let text = r#"<tr><td>a</td><td class="b">12</td><td class="b">34</td>"#;
    let mut cursor = 0;

    let first = find(text, &mut cursor, |t| t.is("td") && t.has_class("b")).unwrap();
    assert_eq!(content_of(text, &first), Some("12"));
    assert_eq!(cursor, first.end());

    let second = find(text, &mut cursor, |t| t.is("td") && t.has_class("b")).unwrap();
    assert_eq!(content_of(text, &second), Some("34"));

    assert!(find(text, &mut cursor, |t| t.is("td")).is_none());
    assert_eq!(cursor, text.len());
}

#[test]
fn content_without_closing_marker_is_none() {
    let text = "<td class=b>unterminated";
    let tag = next_tag(text, 0).unwrap();
    assert_eq!(content_of(text, &tag), None);
}

#[test]
fn malformed_input_never_panics() {
    for text in ["", "<", "<<>>", "< td>", "<td class=\"open>", "末尾<"] {
        let mut cursor = 0;
        let _ = find(text, &mut cursor, |_| true);
    }
    assert!(next_tag("<td>", 99).is_none());
}

#[test]
fn multibyte_text_keeps_offsets_valid() {
    let text = r#"<td class="type_0">攻撃強化【切断】</td><td class="b">7</td>"#;
    let mut scanner = Scanner::new(text);
    let first = scanner.find(|t| t.has_class("type_0")).unwrap();
    assert_eq!(scanner.content(&first), Some("攻撃強化【切断】"));
    let second = scanner.find(|t| t.has_class("b")).unwrap();
    assert_eq!(scanner.content(&second), Some("7"));
}

#[test]
fn scanner_until_does_not_move() {
    let text = "<td class=x>name<br>more</td>";
    let mut scanner = Scanner::new(text);
    scanner.next_tag().unwrap();
    assert_eq!(scanner.until("</td>"), Some("name<br>more"));
    assert_eq!(scanner.position(), 12);
}

#[test]
fn style_declarations_are_split() {
    let style = parse_style("COLOR: #E0002A; font-weight:bold;").unwrap();
    assert_eq!(style.get("color").map(String::as_str), Some("#e0002a"));
    assert_eq!(style.get("font-weight").map(String::as_str), Some("bold"));
    assert!(parse_style("color").is_none());
}
