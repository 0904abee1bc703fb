use crate::catalog::enums::import_error_kind::ImportErrorKind;
use crate::catalog::errors::ImportError;
use crate::common::common::is_identifier;
use crate::introspect::enums::member_kind::MemberKind;
use crate::introspect::structs::logical_line::LogicalLine;
use crate::introspect::structs::member_doc::MemberDoc;
use crate::introspect::structs::module_doc::ModuleDoc;

pub const MAX_VALUE_LENGTH: usize = 100;

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in",
    "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

struct FunctionHeader {
    name: String,
    is_async: bool,
    signature: String,
    inline: String,
}

struct ClassHeader {
    name: String,
    bases: Option<String>,
    inline: String,
}

struct ImportBinding {
    name: String,
    /// Dotted path as written; relative imports keep their leading dots.
    origin: String,
}

/// Headers whose bodies may hold alternative imports, e.g. `try:` / `except ImportError:`.
const CONDITIONAL_HEADERS: &[&str] = &["try", "except", "else", "finally", "if", "elif"];

struct Assignment {
    name: String,
    annotation: Option<String>,
    value: Option<String>,
}

/// Scans Python source and extracts its documented members.
pub fn parse_module(name: &str, source: &str) -> Result<ModuleDoc, ImportError> {
    let lines = scan_lines(source)
        .map_err(|message| ImportError::new(name, ImportErrorKind::SyntaxError, message))?;

    let docstring = lines
        .first()
        .filter(|line| line.indent == 0)
        .and_then(|line| string_literal_value(&line.text));
    let start = if docstring.is_some() { 1 } else { 0 };
    let (members, all) = parse_block(&lines[start..], 0, None);

    Ok(ModuleDoc {
        name: name.to_string(),
        docstring,
        all,
        members,
        path: None,
        is_package: false,
    })
}

/// Folds physical lines into logical lines.
///
/// Bracketed and backslash continuations are joined, comments dropped and
/// string literals kept verbatim, including the newlines of triple-quoted
/// strings.
pub fn scan_lines(source: &str) -> Result<Vec<LogicalLine>, String> {
    let chars: Vec<char> = source.chars().collect();
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut brackets: Vec<(char, usize)> = Vec::new();
    let mut lineno = 1usize;
    let mut start_line = 1usize;
    let mut indent = 0usize;
    let mut at_line_start = true;
    let mut i = 0usize;

    while i < chars.len() {
        if at_line_start {
            let mut column = 0usize;
            while i < chars.len() && matches!(chars[i], ' ' | '\t' | '\x0c') {
                column = match chars[i] {
                    '\t' => (column / 8 + 1) * 8,
                    ' ' => column + 1,
                    _ => 0
                };
                i += 1;
            }
            if i >= chars.len() {
                break;
            }
            if matches!(chars[i], '\n' | '\r' | '#') {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                i += 1;
                lineno += 1;
                continue;
            }
            indent = column;
            start_line = lineno;
            at_line_start = false;
            continue;
        }

        let c = chars[i];
        match c {
            '#' => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            }
            '\'' | '"' => {
                let triple = chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c);
                let opened_at = lineno;
                let quote_len = if triple { 3 } else { 1 };
                current.extend(&chars[i..i + quote_len]);
                i += quote_len;
                loop {
                    let Some(&inner) = chars.get(i) else {
                        return Err(if triple {
                            format!("unterminated triple-quoted string literal (detected at line {opened_at})")
                        } else {
                            format!("unterminated string literal (detected at line {opened_at})")
                        });
                    };
                    if inner == '\\' {
                        current.push(inner);
                        if let Some(&escaped) = chars.get(i + 1) {
                            if escaped == '\n' {
                                lineno += 1;
                            }
                            current.push(escaped);
                        }
                        i += 2;
                        continue;
                    }
                    if inner == '\n' {
                        if !triple {
                            return Err(format!("unterminated string literal (detected at line {opened_at})"));
                        }
                        lineno += 1;
                    }
                    if inner == c && (!triple || (chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c))) {
                        current.extend(&chars[i..i + quote_len]);
                        i += quote_len;
                        break;
                    }
                    if inner != '\r' {
                        current.push(inner);
                    }
                    i += 1;
                }
                continue;
            }
            '(' | '[' | '{' => {
                brackets.push((c, lineno));
                current.push(c);
            }
            ')' | ']' | '}' => {
                match brackets.pop() {
                    None => return Err(format!("unmatched '{c}' (line {lineno})")),
                    Some((open, _)) if closing_for(open) != c => {
                        return Err(format!("closing parenthesis '{c}' does not match opening parenthesis '{open}' (line {lineno})"));
                    }
                    Some(_) => current.push(c)
                }
            }
            '\\' if chars.get(i + 1) == Some(&'\n') || (chars.get(i + 1) == Some(&'\r') && chars.get(i + 2) == Some(&'\n')) => {
                i += if chars[i + 1] == '\r' { 3 } else { 2 };
                lineno += 1;
                current.push(' ');
                continue;
            }
            '\r' => {}
            '\n' => {
                lineno += 1;
                if brackets.is_empty() {
                    push_line(&mut lines, &mut current, indent, start_line);
                    at_line_start = true;
                } else {
                    current.push(' ');
                }
            }
            _ => current.push(c)
        }
        i += 1;
    }

    if let Some((open, line)) = brackets.first() {
        return Err(format!("'{open}' was never closed (line {line})"));
    }
    push_line(&mut lines, &mut current, indent, start_line);
    Ok(lines)
}

fn push_line(lines: &mut Vec<LogicalLine>, current: &mut String, indent: usize, lineno: usize) {
    let text = current.trim_end();
    if !text.is_empty() {
        lines.push(LogicalLine {
            indent,
            lineno,
            text: text.to_string(),
        });
    }
    current.clear();
}

fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}'
    }
}

fn parse_block(lines: &[LogicalLine], indent: usize, owner: Option<&str>) -> (Vec<MemberDoc>, Option<Vec<String>>) {
    let mut members: Vec<MemberDoc> = Vec::new();
    let mut all = None;
    let mut decorators: Vec<String> = Vec::new();
    let mut index = 0usize;

    while index < lines.len() {
        let line = &lines[index];
        if line.indent != indent {
            index += 1;
            continue;
        }
        let end = block_end(lines, index, indent);
        let body = &lines[index + 1..end];
        let text = line.text.as_str();

        if let Some(decorator) = text.strip_prefix('@') {
            decorators.push(normalize_whitespace(decorator.trim()));
            index += 1;
            continue;
        }

        if let Some(header) = parse_def(text) {
            let docstring = block_docstring(body, indent).or_else(|| string_literal_value(&header.inline));
            upsert(&mut members, MemberDoc {
                qualname: qualify(owner, &header.name),
                name: header.name,
                kind: if owner.is_some() { MemberKind::method } else { MemberKind::function },
                is_async: header.is_async,
                signature: Some(header.signature),
                annotation: None,
                value: None,
                docstring,
                decorators: std::mem::take(&mut decorators),
                members: Vec::new(),
            });
            index = end;
            continue;
        }

        if let Some(header) = parse_class(text) {
            let qualname = qualify(owner, &header.name);
            let docstring = block_docstring(body, indent).or_else(|| string_literal_value(&header.inline));
            let nested = match body.first() {
                Some(first) if first.indent > indent => parse_block(body, first.indent, Some(&qualname)).0,
                _ => Vec::new()
            };
            upsert(&mut members, MemberDoc {
                qualname,
                name: header.name,
                kind: MemberKind::class,
                is_async: false,
                signature: header.bases,
                annotation: None,
                value: None,
                docstring,
                decorators: std::mem::take(&mut decorators),
                members: nested,
            });
            index = end;
            continue;
        }

        decorators.clear();

        if owner.is_none() {
            if let Some(bindings) = parse_import(text) {
                for binding in bindings {
                    upsert(&mut members, import_member(binding));
                }
                index = end.max(index + 1);
                continue;
            }
            if is_conditional_header(text) {
                for nested in body {
                    for binding in parse_import(&nested.text).unwrap_or_default() {
                        if !members.iter().any(|member| member.name == binding.name) {
                            members.push(import_member(binding));
                        }
                    }
                }
                index = end;
                continue;
            }
        }

        if let Some(assignment) = parse_assignment(text) {
            let docstring = lines
                .get(index + 1)
                .filter(|next| next.indent == indent)
                .and_then(|next| string_literal_value(&next.text));
            if owner.is_none() && assignment.name == "__all__" {
                all = assignment.value.as_deref().map(parse_all);
            }
            if docstring.is_some() {
                index += 1;
            }
            upsert(&mut members, MemberDoc {
                qualname: qualify(owner, &assignment.name),
                name: assignment.name,
                kind: if owner.is_some() { MemberKind::attribute } else { MemberKind::variable },
                is_async: false,
                signature: None,
                annotation: assignment.annotation,
                value: assignment.value.map(|value| shorten(&value)),
                docstring,
                decorators: Vec::new(),
                members: Vec::new(),
            });
        }
        index = end.max(index + 1);
    }

    (members, all)
}

fn import_member(binding: ImportBinding) -> MemberDoc {
    MemberDoc {
        qualname: binding.name.clone(),
        name: binding.name,
        kind: MemberKind::reexport,
        is_async: false,
        signature: None,
        annotation: None,
        value: Some(binding.origin),
        docstring: None,
        decorators: Vec::new(),
        members: Vec::new(),
    }
}

fn is_conditional_header(text: &str) -> bool {
    text.ends_with(':')
        && text
            .split(|c: char| c.is_whitespace() || c == ':' || c == '(')
            .next()
            .is_some_and(|keyword| CONDITIONAL_HEADERS.contains(&keyword))
}

fn is_name(name: &str) -> bool {
    is_identifier(name) && !KEYWORDS.contains(&name)
}

/// Names bound by an `import` or `from ... import` statement.
///
/// `import a.b` binds `a`, `import a.b as c` binds `c` to `a.b` and
/// `from .x import y as z` binds `z` to `.x.y`. Star imports bind nothing
/// that can be listed and yield `None`.
fn parse_import(text: &str) -> Option<Vec<ImportBinding>> {
    let text = normalize_whitespace(text);
    if let Some(rest) = text.strip_prefix("from ") {
        let (module, names) = rest.split_once(" import ")?;
        let module = module.trim();
        let dotted = module.trim_start_matches('.');
        let valid_module = if dotted.is_empty() {
            !module.is_empty()
        } else {
            dotted.split('.').all(is_name)
        };
        if !valid_module {
            return None;
        }
        let names = names.trim();
        let names = names
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(names);

        let mut bindings = Vec::new();
        for item in names.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (imported, bound) = match item.split_once(" as ") {
                Some((imported, bound)) => (imported.trim(), bound.trim()),
                None => (item, item)
            };
            if !is_name(imported) || !is_name(bound) {
                return None;
            }
            let separator = if module.ends_with('.') { "" } else { "." };
            bindings.push(ImportBinding {
                name: bound.to_string(),
                origin: format!("{module}{separator}{imported}"),
            });
        }
        return if bindings.is_empty() { None } else { Some(bindings) };
    }

    let rest = text.strip_prefix("import ")?;
    let mut bindings = Vec::new();
    for item in rest.split(',').map(str::trim) {
        let (path, bound) = match item.split_once(" as ") {
            Some((path, bound)) => (path.trim(), Some(bound.trim())),
            None => (item, None)
        };
        if !path.split('.').all(is_name) {
            return None;
        }
        let binding = match bound {
            Some(bound) if is_name(bound) => ImportBinding {
                name: bound.to_string(),
                origin: path.to_string(),
            },
            Some(_) => return None,
            None => {
                let top = path.split('.').next().unwrap_or(path);
                ImportBinding {
                    name: top.to_string(),
                    origin: top.to_string(),
                }
            }
        };
        bindings.push(binding);
    }
    Some(bindings)
}

/// Redefinitions replace the earlier member but keep its position.
fn upsert(members: &mut Vec<MemberDoc>, member: MemberDoc) {
    match members.iter().position(|existing| existing.name == member.name) {
        Some(position) => members[position] = member,
        None => members.push(member)
    }
}

fn qualify(owner: Option<&str>, name: &str) -> String {
    match owner {
        Some(owner) => format!("{owner}.{name}"),
        None => name.to_string()
    }
}

fn block_end(lines: &[LogicalLine], index: usize, indent: usize) -> usize {
    let mut end = index + 1;
    while end < lines.len() && lines[end].indent > indent {
        end += 1;
    }
    end
}

fn block_docstring(body: &[LogicalLine], indent: usize) -> Option<String> {
    body.first()
        .filter(|line| line.indent > indent)
        .and_then(|line| string_literal_value(&line.text))
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

fn split_identifier(text: &str) -> Option<(&str, &str)> {
    let first = text.chars().next()?;
    if !(first.is_alphabetic() || first == '_') {
        return None;
    }
    let end = text
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    Some((&text[..end], &text[end..]))
}

fn parse_def(text: &str) -> Option<FunctionHeader> {
    let (is_async, rest) = match strip_keyword(text, "async") {
        Some(rest) => (true, rest),
        None => (false, text)
    };
    let rest = strip_keyword(rest, "def")?;
    let (name, rest) = split_identifier(rest)?;
    let rest = rest.trim_start();
    if !rest.starts_with('(') {
        return None;
    }
    let close = find_closing(rest)?;
    let after = &rest[close + 1..];
    let colon = find_top_level(after, ':')?;
    let returns = after[..colon].trim();

    let mut signature = normalize_whitespace(&rest[..=close]);
    if let Some(annotation) = returns.strip_prefix("->") {
        signature.push_str(" -> ");
        signature.push_str(&normalize_whitespace(annotation.trim()));
    } else if !returns.is_empty() {
        return None;
    }

    Some(FunctionHeader {
        name: name.to_string(),
        is_async,
        signature,
        inline: after[colon + 1..].trim().to_string(),
    })
}

fn parse_class(text: &str) -> Option<ClassHeader> {
    let rest = strip_keyword(text, "class")?;
    let (name, rest) = split_identifier(rest)?;
    let mut rest = rest.trim_start();
    if rest.starts_with('[') {
        let close = find_closing(rest)?;
        rest = rest[close + 1..].trim_start();
    }
    let mut bases = None;
    if rest.starts_with('(') {
        let close = find_closing(rest)?;
        let raw = normalize_whitespace(&rest[..=close]);
        if raw != "()" {
            bases = Some(raw);
        }
        rest = rest[close + 1..].trim_start();
    }
    let inline = rest.strip_prefix(':')?;
    Some(ClassHeader {
        name: name.to_string(),
        bases,
        inline: inline.trim().to_string(),
    })
}

fn parse_assignment(text: &str) -> Option<Assignment> {
    let (name, rest) = split_identifier(text)?;
    if KEYWORDS.contains(&name) {
        return None;
    }
    let rest = rest.trim_start();

    if let Some(after) = rest.strip_prefix(':') {
        let (annotation, value) = match find_assignment_operator(after) {
            Some(position) => (after[..position].trim(), Some(after[position + 1..].trim())),
            None => (after.trim(), None)
        };
        if annotation.is_empty() {
            return None;
        }
        return Some(Assignment {
            name: name.to_string(),
            annotation: Some(normalize_whitespace(annotation)),
            value: value.filter(|value| !value.is_empty()).map(normalize_whitespace),
        });
    }

    if rest.starts_with('=') && !rest.starts_with("==") {
        let value = rest[1..].trim();
        return Some(Assignment {
            name: name.to_string(),
            annotation: None,
            value: if value.is_empty() { None } else { Some(normalize_whitespace(value)) },
        });
    }
    None
}

fn find_assignment_operator(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    top_level_chars(text)
        .into_iter()
        .find(|(index, c, depth)| {
            *c == '='
                && *depth == 0
                && bytes.get(index + 1) != Some(&b'=')
                && !(*index > 0 && matches!(bytes[index - 1], b'=' | b'!' | b'<' | b'>' | b':'))
        })
        .map(|(index, _, _)| index)
}

/// Names listed as string literals inside an `__all__` value.
fn parse_all(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut names = Vec::new();
    let mut i = 0usize;
    while i < chars.len() {
        if chars[i] == '\'' || chars[i] == '"' {
            let end = skip_string(&chars, i);
            if end > i + 1 {
                let name: String = chars[i + 1..end - 1].iter().collect();
                if split_identifier(&name).is_some_and(|(_, rest)| rest.is_empty()) && !names.contains(&name) {
                    names.push(name);
                }
            }
            i = end;
            continue;
        }
        i += 1;
    }
    names
}

fn shorten(value: &str) -> String {
    if value.chars().count() <= MAX_VALUE_LENGTH {
        return value.to_string();
    }
    let mut shortened: String = value.chars().take(MAX_VALUE_LENGTH).collect();
    shortened.push_str("...");
    shortened
}

/// Index just past the string literal starting at `start`.
fn skip_string(chars: &[char], start: usize) -> usize {
    let quote = chars[start];
    let triple = chars.get(start + 1) == Some(&quote) && chars.get(start + 2) == Some(&quote);
    let mut i = start + if triple { 3 } else { 1 };
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            i += 2;
            continue;
        }
        if c == quote {
            if !triple {
                return i + 1;
            }
            if chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote) {
                return i + 3;
            }
        }
        i += 1;
    }
    chars.len()
}

/// Characters outside string literals, with byte offset and bracket depth before the character.
fn top_level_chars(text: &str) -> Vec<(usize, char, i32)> {
    let indexed: Vec<(usize, char)> = text.char_indices().collect();
    let chars: Vec<char> = indexed.iter().map(|(_, c)| *c).collect();
    let mut result = Vec::with_capacity(chars.len());
    let mut depth = 0i32;
    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' || c == '"' {
            i = skip_string(&chars, i);
            continue;
        }
        result.push((indexed[i].0, c, depth));
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    result
}

/// Byte offset of the bracket closing the one `text` starts with.
fn find_closing(text: &str) -> Option<usize> {
    top_level_chars(text)
        .into_iter()
        .find(|(index, c, depth)| *index > 0 && *depth == 1 && matches!(c, ')' | ']' | '}'))
        .map(|(index, _, _)| index)
}

fn find_top_level(text: &str, target: char) -> Option<usize> {
    top_level_chars(text)
        .into_iter()
        .find(|(_, c, depth)| *c == target && *depth == 0)
        .map(|(index, _, _)| index)
}

/// Collapses whitespace runs outside string literals and drops padding inside brackets.
pub fn normalize_whitespace(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut normalized = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            pending_space = true;
            i += 1;
            continue;
        }
        if pending_space {
            let previous = normalized.chars().last();
            if previous.is_some() && !matches!(previous, Some('(' | '[' | '{')) && !matches!(c, ')' | ']' | '}') {
                normalized.push(' ');
            }
            pending_space = false;
        }
        if c == '\'' || c == '"' {
            let end = skip_string(&chars, i);
            normalized.extend(&chars[i..end]);
            i = end;
            continue;
        }
        normalized.push(c);
        i += 1;
    }
    normalized
}

/// Value of a statement consisting of a single (non-bytes, non-f) string literal, cleaned like a docstring.
pub fn string_literal_value(text: &str) -> Option<String> {
    let text = text.trim();
    let prefix_len = text
        .chars()
        .take_while(|c| matches!(c, 'r' | 'R' | 'u' | 'U' | 'b' | 'B' | 'f' | 'F'))
        .count();
    if prefix_len > 2 {
        return None;
    }
    let prefix = &text[..prefix_len];
    if prefix.contains(['b', 'B', 'f', 'F']) {
        return None;
    }
    let raw = prefix.contains(['r', 'R']);

    let chars: Vec<char> = text[prefix_len..].chars().collect();
    let quote = *chars.first()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    let end = skip_string(&chars, 0);
    if end != chars.len() {
        return None;
    }
    let triple = chars.len() >= 6 && chars[1] == quote && chars[2] == quote;
    let quote_len = if triple { 3 } else { 1 };
    if chars.len() < quote_len * 2 {
        return None;
    }
    let inner: String = chars[quote_len..chars.len() - quote_len].iter().collect();
    let value = if raw { inner } else { unescape(&inner) };
    Some(cleandoc(&value))
}

fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('t') => unescaped.push('\t'),
            Some('r') => unescaped.push('\r'),
            Some('\\') => unescaped.push('\\'),
            Some('\'') => unescaped.push('\''),
            Some('"') => unescaped.push('"'),
            Some('\n') => {}
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\')
        }
    }
    unescaped
}

fn expand_tabs(line: &str) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut column = 0usize;
    for c in line.chars() {
        if c == '\t' {
            let width = 8 - column % 8;
            expanded.extend(std::iter::repeat_n(' ', width));
            column += width;
        } else {
            expanded.push(c);
            column += 1;
        }
    }
    expanded
}

/// Strips the common indentation of all lines after the first, like `inspect.cleandoc`.
pub fn cleandoc(doc: &str) -> String {
    let lines: Vec<String> = doc.lines().map(expand_tabs).collect();
    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<&str> = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let stripped = if index == 0 {
            line.trim_start()
        } else {
            line.get(margin..).unwrap_or_else(|| line.trim_start())
        };
        cleaned.push(stripped.trim_end());
    }
    while cleaned.first().is_some_and(|line| line.is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|line| line.is_empty()) {
        cleaned.pop();
    }
    cleaned.join("\n")
}
