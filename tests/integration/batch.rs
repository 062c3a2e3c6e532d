//! Batch translation of many lines

use nzsl::runtime::Translator;

#[test]
fn one_output_line_per_input_line() {
    let input = "\
I am not going tomorrow
the red apple is big

the is a
My friend didn't come yesterday
";
    let mut output = Vec::new();
    let lines = Translator::default()
        .gloss_lines(input.as_bytes(), &mut output)
        .unwrap();
    assert_eq!(lines, 5);
    let text = String::from_utf8(output).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(
        rows,
        vec![
            "tomorrow me going not",
            "apple red big",
            "",
            "",
            "yesterday me friend come not",
        ]
    );
}

#[test]
fn batch_without_tagger_is_plain_split() {
    let translator = Translator::new(nzsl::gloss::GlossReorderer::without_tagger());
    let mut output = Vec::new();
    translator
        .gloss_lines("I am not going tomorrow\n".as_bytes(), &mut output)
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "i not going tomorrow\n");
}
