// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Positional scraping of the raylib header text.
//!
//! The header is treated as a flat line array, not a parsed grammar: version
//! constants sit at four hard-coded line indices, the color table and the
//! exported declarations in fixed line ranges. This is fragile by design —
//! any reformatting of the header at those positions fails the run — and is
//! acceptable only because generation is a one-shot, human-supervised step.

use crate::error::{Error, Result};

/// Line indices of the four version `#define`s.
pub const VERSION_LINES: [usize; 4] = [83, 84, 85, 86];

/// Line range holding the color constant table.
pub const COLOR_LINES: std::ops::Range<usize> = 163..190;

/// Line range holding the exported function declarations.
pub const FUNCTION_LINES: std::ops::Range<usize> = 953..1656;

/// Marker every exported declaration line starts with.
const EXPORT_MARKER: &str = "RLAPI";

/// The four version tokens, taken verbatim from the header.
///
/// `major`/`minor`/`patch` are bare integers; `full` keeps the quotes it
/// carries in the header (e.g. `"5.0"`).
#[derive(Debug, PartialEq, Eq)]
pub struct Versions {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub full: String,
}

/// One entry of the color constant table, in source (R, G, B, A) order.
#[derive(Debug, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// One exported declaration with its raw type strings, still unclassified.
#[derive(Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Header line the declaration was scraped from (for diagnostics).
    pub line: usize,
    pub name: String,
    /// Trailing `//` comment, used as the generated doc line.
    pub doc: String,
    pub ret: String,
    pub params: Vec<String>,
}

fn line<'a>(lines: &'a [&'a str], index: usize) -> Result<&'a str> {
    lines.get(index).copied().ok_or(Error::MissingLine(index))
}

/// Splits a `type name` fragment into `(name, type)`.
///
/// The name is the last whitespace token with its leading `*`s stripped;
/// the pointer depth is folded back into the type string as a ` *` / ` **`
/// suffix, matching the classification table keys.
pub fn extract(core: &str) -> (String, String) {
    let depth = core.matches('*').count();
    let tokens: Vec<&str> = core.split(' ').collect();
    let name = tokens.last().copied().unwrap_or_default();
    let name = name[name.len().min(depth)..].to_string();
    let mut ty = tokens[..tokens.len().saturating_sub(1)].join(" ");
    if depth > 0 {
        ty.push(' ');
        ty.extend(std::iter::repeat_n('*', depth));
    }
    (name, ty)
}

/// Reads the four version tokens from their fixed line indices.
pub fn scrape_versions(lines: &[&str]) -> Result<Versions> {
    let mut tokens = VERSION_LINES.iter().map(|&index| {
        let text = line(lines, index)?;
        text.trim_end()
            .rsplit(' ')
            .next()
            .map(str::to_string)
            .ok_or_else(|| Error::Malformed { line: index, detail: "empty version line".into() })
    });
    Ok(Versions {
        major: tokens.next().unwrap()?,
        minor: tokens.next().unwrap()?,
        patch: tokens.next().unwrap()?,
        full: tokens.next().unwrap()?,
    })
}

/// Scans the color table range, skipping blank lines.
pub fn scrape_colors(lines: &[&str]) -> Result<Vec<ColorEntry>> {
    let mut entries = Vec::new();
    for index in COLOR_LINES {
        let text = line(lines, index)?;
        if text.trim().is_empty() {
            continue;
        }
        let stripped = text.replace(',', "");
        let values: Vec<&str> = stripped.split_whitespace().collect();
        if values.len() < 7 {
            return Err(Error::Malformed { line: index, detail: "short color line".into() });
        }
        let channel = |token: &str| {
            token.parse::<u8>().map_err(|_| Error::BadChannel { line: index, token: token.into() })
        };
        entries.push(ColorEntry {
            name: values[1].to_string(),
            r: channel(values[3])?,
            g: channel(values[4])?,
            b: channel(values[5])?,
            a: channel(values[6])?,
        });
    }
    Ok(entries)
}

/// Scans the declaration range, keeping exported, non-variadic functions.
pub fn scrape_functions(lines: &[&str]) -> Result<Vec<Declaration>> {
    let mut declarations = Vec::new();
    for index in FUNCTION_LINES {
        let text = line(lines, index)?;
        if !text.starts_with(EXPORT_MARKER) {
            continue;
        }
        // Variadic functions cannot be described by a fixed parameter list.
        if text.contains("...") {
            continue;
        }
        let doc = text
            .split("//")
            .nth(1)
            .map(str::trim)
            .ok_or_else(|| Error::Malformed { line: index, detail: "missing doc comment".into() })?
            .to_string();
        let (head, rest) = text
            .split_once('(')
            .ok_or_else(|| Error::Malformed { line: index, detail: "no parameter list".into() })?;
        let core = head
            .split(' ')
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ");
        let (name, ret) = extract(&core);
        let param_list = rest
            .split(')')
            .next()
            .ok_or_else(|| Error::Malformed { line: index, detail: "unterminated list".into() })?;
        let params = if param_list == "void" {
            Vec::new()
        } else {
            param_list.split(',').map(|fragment| extract(fragment.trim()).1).collect()
        };
        declarations.push(Declaration { line: index, name, doc, ret, params });
    }
    Ok(declarations)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a synthetic header with given lines placed at fixed indices.
    fn header(entries: &[(usize, &'static str)]) -> Vec<&'static str> {
        let top = entries.iter().map(|&(index, _)| index).max().unwrap_or(0);
        let mut lines = vec![""; top + 1];
        for &(index, text) in entries {
            lines[index] = text;
        }
        lines
    }

    #[test]
    fn version_tokens_are_taken_verbatim() {
        let lines = header(&[
            (83, "#define RAYLIB_VERSION_MAJOR 4"),
            (84, "#define RAYLIB_VERSION_MINOR 0"),
            (85, "#define RAYLIB_VERSION_PATCH 0"),
            (86, "#define RAYLIB_VERSION \"4.0\""),
        ]);
        let versions = scrape_versions(&lines).unwrap();
        assert_eq!(versions.major, "4");
        assert_eq!(versions.minor, "0");
        assert_eq!(versions.patch, "0");
        assert_eq!(versions.full, "\"4.0\"");
    }

    #[test]
    fn short_header_is_rejected() {
        let lines = vec![""; 10];
        assert!(matches!(scrape_versions(&lines), Err(Error::MissingLine(83))));
    }

    #[test]
    fn color_lines_parse_positionally() {
        let mut entries = vec![(189, "")];
        entries.push((163, "#define RED        CLITERAL(Color){ 230, 41, 55, 255 }     // Red"));
        entries.push((165, "#define BLANK      CLITERAL(Color){ 0, 0, 0, 0 }           // Blank (Transparent)"));
        let colors = scrape_colors(&header(&entries)).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].name, "RED");
        assert_eq!((colors[0].r, colors[0].g, colors[0].b, colors[0].a), (230, 41, 55, 255));
        assert_eq!(colors[1].name, "BLANK");
        assert_eq!(colors[1].a, 0);
    }

    #[test]
    fn bad_channel_token_fails() {
        let lines = header(&[
            (163, "#define BAD CLITERAL(Color){ 300, 0, 0, 255 }  // Out of range"),
            (189, ""),
        ]);
        assert!(matches!(scrape_colors(&lines), Err(Error::BadChannel { line: 163, .. })));
    }

    #[test]
    fn extract_folds_pointer_depth_into_type() {
        assert_eq!(
            extract("const char *fileName"),
            ("fileName".to_string(), "const char *".to_string())
        );
        assert_eq!(extract("const char **paths"), ("paths".to_string(), "const char **".to_string()));
        assert_eq!(extract("Vector2 position"), ("position".to_string(), "Vector2".to_string()));
        assert_eq!(extract("int width"), ("width".to_string(), "int".to_string()));
    }

    #[test]
    fn declarations_parse_name_return_and_params() {
        let lines = header(&[
            (953, "RLAPI void InitWindow(int width, int height, const char *title);  // Initialize window and OpenGL context"),
            (954, "RLAPI bool WindowShouldClose(void);                               // Check if application should close"),
            (955, "typedef struct NotExported { int x; } NotExported;"),
            (1655, ""),
        ]);
        let declarations = scrape_functions(&lines).unwrap();
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].name, "InitWindow");
        assert_eq!(declarations[0].ret, "void");
        assert_eq!(declarations[0].doc, "Initialize window and OpenGL context");
        assert_eq!(declarations[0].params, vec!["int", "int", "const char *"]);
        assert_eq!(declarations[1].name, "WindowShouldClose");
        assert_eq!(declarations[1].ret, "bool");
        assert!(declarations[1].params.is_empty());
    }

    #[test]
    fn variadic_declarations_are_excluded() {
        let lines = header(&[
            (953, "RLAPI void TraceLog(int logLevel, const char *text, ...);  // Show trace log messages"),
            (954, "RLAPI void CloseWindow(void);                              // Close window and unload OpenGL context"),
            (1655, ""),
        ]);
        let declarations = scrape_functions(&lines).unwrap();
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].name, "CloseWindow");
    }

    #[test]
    fn pointer_return_types_keep_depth() {
        let lines = header(&[
            (953, "RLAPI const char *GetClipboardText(void);  // Get clipboard text content"),
            (1655, ""),
        ]);
        let declarations = scrape_functions(&lines).unwrap();
        assert_eq!(declarations[0].name, "GetClipboardText");
        assert_eq!(declarations[0].ret, "const char *");
    }
}
