/// One entry of the `search.json` document.
pub mod search_entry;
