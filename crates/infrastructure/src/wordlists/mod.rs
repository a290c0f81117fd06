mod list_source;

pub use list_source::{
    list_source_for, parse_list_line, parse_list_text, shared_client, FileListSource,
    UrlListSource,
};
