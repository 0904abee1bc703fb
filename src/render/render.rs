use std::collections::{BTreeMap, HashMap, HashSet};
use crate::catalog::errors::ImportError;
use crate::catalog::structs::diagnostics::Diagnostics;
use crate::catalog::structs::module_catalog::ModuleCatalog;
use crate::catalog::traits::module_source::ModuleSource;
use crate::common::common::html_escape;
use crate::introspect::enums::member_kind::MemberKind;
use crate::introspect::structs::member_doc::MemberDoc;
use crate::introspect::structs::module_doc::ModuleDoc;
use crate::render::structs::search_entry::SearchEntry;

const STYLE: &str = "body{font-family:sans-serif;max-width:60em;margin:2em auto;padding:0 1em}\
code,pre,.signature{font-family:monospace}\
pre{background:#f6f6f6;padding:.5em;white-space:pre-wrap}\
section{margin-left:1em}\
.error{color:#a00}";

fn page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n{content}</main>\n</body>\n</html>\n",
        html_escape(title)
    )
}

fn module_link(name: &str, absolute: bool) -> String {
    let slash = if absolute { "/" } else { "" };
    format!("<a href=\"{slash}{0}.html\">{0}</a>", html_escape(name))
}

fn index_tree<'a>(catalog: &'a ModuleCatalog, name: &'a str, listed: &mut HashSet<&'a str>, out: &mut String) {
    listed.insert(name);
    out.push_str(&format!("<li>{}", module_link(name, false)));
    let children: Vec<&str> = catalog.children(name).into_iter().filter(|child| !listed.contains(child)).collect();
    if !children.is_empty() {
        out.push_str("\n<ul>\n");
        for child in children {
            index_tree(catalog, child, listed, out);
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</li>\n");
}

/// Index page: one entry per root module, submodules nested below it.
///
/// Every module is listed once. A root that already appears below an
/// earlier root is not repeated at the top level.
pub fn render_index(catalog: &ModuleCatalog) -> String {
    let mut content = String::from("<h1>Modules</h1>\n");
    if catalog.roots().is_empty() {
        content.push_str("<p>No modules configured.</p>\n");
        return page("Module index", &content);
    }
    let mut listed = HashSet::new();
    content.push_str("<ul>\n");
    for root in catalog.roots() {
        if !listed.contains(root.as_str()) {
            index_tree(catalog, root, &mut listed, &mut content);
        }
    }
    content.push_str("</ul>\n");
    page("Module index", &content)
}

fn search_entry(module: &str, member: &MemberDoc) -> SearchEntry {
    SearchEntry {
        kind: member.kind,
        module: module.to_string(),
        qualname: member.qualname.clone(),
        signature: member.signature.clone(),
        doc: member.summary().map(str::to_string),
        origin: None,
    }
}

fn module_entry(module: &ModuleDoc) -> SearchEntry {
    SearchEntry {
        kind: MemberKind::module,
        module: module.name.clone(),
        qualname: String::new(),
        signature: None,
        doc: module.summary().map(str::to_string),
        origin: None,
    }
}

fn index_members(module: &str, members: Vec<&MemberDoc>, entries: &mut BTreeMap<String, SearchEntry>) {
    for member in members {
        entries.insert(format!("{module}.{}", member.qualname), search_entry(module, member));
        if member.kind == MemberKind::class {
            index_members(module, member.public_members(), entries);
        }
    }
}

/// Entry for the object an absolute import origin names, loading its module through `source`.
///
/// The longest loadable prefix of `origin` is taken as the module, the rest
/// as the member inside it.
fn origin_entry(origin: &str, source: &dyn ModuleSource, loaded: &mut HashMap<String, Option<ModuleDoc>>) -> Option<SearchEntry> {
    let mut module = origin;
    loop {
        let doc = loaded.entry(module.to_string()).or_insert_with(|| source.load(module).ok());
        if let Some(doc) = doc {
            let attribute = origin[module.len()..].trim_start_matches('.');
            if attribute.is_empty() {
                return Some(module_entry(doc));
            }
            return doc.member(attribute).map(|target| search_entry(&doc.name, target));
        }
        let (parent, _) = module.rsplit_once('.')?;
        module = parent;
    }
}

/// Entry for a re-exported name, described by the object it refers to when that can be found.
fn reexport_entry(module: &ModuleDoc, member: &MemberDoc, source: &dyn ModuleSource, loaded: &mut HashMap<String, Option<ModuleDoc>>) -> SearchEntry {
    let written = member.value.clone().unwrap_or_default();
    let origin = module.resolve_origin(&written);
    let target = origin.as_deref().and_then(|origin| origin_entry(origin, source, loaded));
    SearchEntry {
        kind: target.as_ref().map_or(MemberKind::reexport, |target| target.kind),
        module: module.name.clone(),
        qualname: member.qualname.clone(),
        signature: target.as_ref().and_then(|target| target.signature.clone()),
        doc: target.and_then(|target| target.doc),
        origin: Some(origin.unwrap_or(written)),
    }
}

/// Search document over every catalog member that loads.
///
/// Keys are fully qualified names (`module`, `module.symbol`,
/// `module.Class.method`). A module that fails to load contributes nothing
/// and is reported once to `diagnostics`. A re-exported name never replaces
/// the entry of a module with the same dotted name.
#[tracing::instrument(level = "debug", skip_all)]
pub fn render_search(catalog: &ModuleCatalog, source: &dyn ModuleSource, diagnostics: &mut Diagnostics) -> Result<Vec<u8>, serde_json::Error> {
    let mut entries = BTreeMap::new();
    let mut loaded = HashMap::new();
    for name in catalog {
        let module = match source.load(name) {
            Ok(module) => module,
            Err(error) => {
                diagnostics.import_failed(&error);
                continue;
            }
        };
        entries.insert(name.clone(), module_entry(&module));
        for member in module.public_members() {
            if member.kind == MemberKind::reexport {
                let entry = reexport_entry(&module, member, source, &mut loaded);
                entries.entry(format!("{name}.{}", member.qualname)).or_insert(entry);
            } else {
                index_members(name, vec![member], &mut entries);
            }
        }
    }
    serde_json::to_vec(&entries)
}

/// Link to the page documenting an import origin, or the plain path when no catalog module covers it.
fn origin_link(doc: &ModuleDoc, catalog: &ModuleCatalog, written: &str) -> String {
    let Some(origin) = doc.resolve_origin(written) else {
        return html_escape(written);
    };
    let mut module = origin.as_str();
    loop {
        if catalog.contains(module) {
            let anchor = origin[module.len()..].trim_start_matches('.');
            let fragment = if anchor.is_empty() { String::new() } else { format!("#{}", html_escape(anchor)) };
            return format!("<a href=\"/{}.html{fragment}\">{}</a>", html_escape(module), html_escape(&origin));
        }
        match module.rsplit_once('.') {
            Some((parent, _)) => module = parent,
            None => return html_escape(&origin)
        }
    }
}

fn render_member(doc: &ModuleDoc, catalog: &ModuleCatalog, member: &MemberDoc, out: &mut String) {
    out.push_str(&format!("<section id=\"{}\">\n", html_escape(&member.qualname)));
    for decorator in &member.decorators {
        out.push_str(&format!("<div class=\"decorator\">@{}</div>\n", html_escape(decorator)));
    }

    let mut header = String::new();
    if member.is_async {
        header.push_str("async ");
    }
    let keyword = member.kind.keyword();
    if !keyword.is_empty() {
        header.push_str(&format!("<span class=\"kind\">{keyword}</span> "));
    }
    header.push_str(&format!("<span class=\"name\">{}</span>", html_escape(&member.name)));
    if let Some(signature) = &member.signature {
        header.push_str(&format!("<span class=\"params\">{}</span>", html_escape(signature)));
    }
    if let Some(annotation) = &member.annotation {
        header.push_str(&format!(": {}", html_escape(annotation)));
    }
    match &member.value {
        Some(origin) if member.kind == MemberKind::reexport => {
            header.push_str(&format!(" = {}", origin_link(doc, catalog, origin)));
        }
        Some(value) => header.push_str(&format!(" = {}", html_escape(value))),
        None => {}
    }
    out.push_str(&format!("<div class=\"signature\">{header}</div>\n"));

    if let Some(docstring) = &member.docstring {
        out.push_str(&format!("<pre class=\"docstring\">{}</pre>\n", html_escape(docstring)));
    }
    for child in member.public_members() {
        render_member(doc, catalog, child, out);
    }
    out.push_str("</section>\n");
}

/// Documentation page of a loaded module.
pub fn render_module(doc: &ModuleDoc, catalog: &ModuleCatalog) -> String {
    let kind = if doc.is_package { "Package" } else { "Module" };
    let mut content = format!("<h1>{kind} <code>{}</code></h1>\n", html_escape(&doc.name));

    if let Some((parent, _)) = doc.name.rsplit_once('.') {
        if catalog.contains(parent) {
            content.push_str(&format!("<p>Part of {}</p>\n", module_link(parent, true)));
        }
    }
    if let Some(docstring) = &doc.docstring {
        content.push_str(&format!("<pre class=\"docstring\">{}</pre>\n", html_escape(docstring)));
    }

    let children = catalog.children(&doc.name);
    if !children.is_empty() {
        content.push_str("<h2>Submodules</h2>\n<ul>\n");
        for child in children {
            content.push_str(&format!("<li>{}</li>\n", module_link(child, true)));
        }
        content.push_str("</ul>\n");
    }

    let members = doc.public_members();
    if !members.is_empty() {
        content.push_str("<h2>API</h2>\n");
        for member in members {
            render_member(doc, catalog, member, &mut content);
        }
    }
    page(&format!("{} API documentation", doc.name), &content)
}

/// Page for a catalog member that could not be imported.
pub fn render_import_error(name: &str, error: &ImportError) -> String {
    let content = format!(
        "<h1>Module <code>{}</code></h1>\n<p class=\"error\">Error importing module.</p>\n<pre class=\"error\">{}</pre>\n",
        html_escape(name),
        html_escape(&error.to_string())
    );
    page(&format!("{name} import error"), &content)
}

/// Plain text body for unknown routes.
pub fn render_not_found(path: &str) -> String {
    format!("404 Not Found\n\nNo documentation page at {path}\n")
}
