//! Output assertions

/// Declared names in output order
pub fn declared_names(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("export type "))
        .filter_map(|rest| rest.split(&[' ', '='][..]).next())
        .map(str::to_string)
        .collect()
}

/// Body of one declaration, `export type <name> = ` and `;` stripped
pub fn declaration_body<'a>(output: &'a str, name: &str) -> Option<&'a str> {
    let prefix = format!("export type {name} = ");
    output
        .split("\n\n")
        .find_map(|decl| decl.trim_end().strip_prefix(prefix.as_str()))
        .and_then(|body| body.strip_suffix(';'))
}

pub fn assert_no_qualified_paths(output: &str) {
    for needle in ["[\"Enums\"]", "['Enums']", "[\"CompositeTypes\"]", "['CompositeTypes']"] {
        assert!(
            !output.contains(needle),
            "qualified path `{needle}` survived rewriting:\n{output}"
        );
    }
}

pub fn assert_well_terminated(output: &str) {
    if output.is_empty() {
        return;
    }
    assert!(output.ends_with(";\n"), "output must end with `;\\n`: {output:?}");
    assert!(!output.ends_with(";\n\n"), "trailing separator: {output:?}");
}
