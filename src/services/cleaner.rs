//! Post-processing of extracted section text and code.

use crate::models::Section;

/// Navigation and template lines dropped when they make up a whole line.
const BOILERPLATE_LINES: &[&str] = &[
    "Back",
    "Next",
    "On this page",
    "Definition",
    "Compatibility",
    "Syntax",
    "Behaviors",
    "Examples",
];

/// Lines containing any of these anywhere are dropped.
const BOILERPLATE_FRAGMENTS: &[&str] = &["On this page"];

fn is_boilerplate(line: &str) -> bool {
    BOILERPLATE_LINES.contains(&line)
        || BOILERPLATE_FRAGMENTS
            .iter()
            .any(|fragment| line.contains(fragment))
}

/// Trim lines, drop blanks and boilerplate, collapse consecutive repeats.
pub fn clean_content(raw: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in raw.lines().map(str::trim) {
        if line.is_empty() || is_boilerplate(line) {
            continue;
        }
        if kept.last() == Some(&line) {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}

/// Collapse every whitespace run, newlines included, to a single space.
pub fn clean_code_block(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean every section and subsection in place.
pub fn clean_sections(sections: &mut [Section]) {
    for section in sections {
        section.content = clean_content(&section.content);
        clean_code_blocks(&mut section.code_blocks);

        for sub in &mut section.subsections {
            sub.content = clean_content(&sub.content);
            clean_code_blocks(&mut sub.code_blocks);
        }
    }
}

fn clean_code_blocks(blocks: &mut [String]) {
    for block in blocks {
        *block = clean_code_block(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subsection;

    #[test]
    fn test_clean_content_drops_boilerplate() {
        let raw = "Definition\n  Inserts a document.  \n\nOn this page\nSee: On this page below\nNext";
        assert_eq!(clean_content(raw), "Inserts a document.");
    }

    #[test]
    fn test_clean_content_collapses_consecutive_repeats_only() {
        let raw = "a\na\nb\na\n\na";
        assert_eq!(clean_content(raw), "a\nb\na");
    }

    #[test]
    fn test_clean_content_keeps_partial_boilerplate_words() {
        let raw = "Examples of write concern\nBack up your data";
        assert_eq!(clean_content(raw), raw);
    }

    #[test]
    fn test_clean_content_idempotent() {
        let raw = "  x \nx\nSyntax\n- item\n\n- item\ny\nOn this page\ny";
        let once = clean_content(raw);
        assert_eq!(clean_content(&once), once);
    }

    #[test]
    fn test_clean_code_block() {
        assert_eq!(clean_code_block("find(\n  {a: 1}\n)"), "find( {a: 1} )");
        assert_eq!(clean_code_block("  \n\t "), "");
    }

    #[test]
    fn test_clean_sections_in_place() {
        let mut section = Section::new("Behavior");
        section.content = "Back\ntext\ntext".to_string();
        section.code_blocks = vec!["db.c.find(\n{}\n)".to_string()];

        let mut sub = Subsection::new("Example");
        sub.content = "\n  sub text \n".to_string();
        sub.code_blocks = vec!["a\n\n  b".to_string()];
        section.subsections.push(sub);

        let mut sections = vec![section];
        clean_sections(&mut sections);

        assert_eq!(sections[0].content, "text");
        assert_eq!(sections[0].code_blocks, vec!["db.c.find( {} )"]);
        assert_eq!(sections[0].subsections[0].content, "sub text");
        assert_eq!(sections[0].subsections[0].code_blocks, vec!["a b"]);
    }
}
