//! Extension-to-label table used for syntax tagging

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Label used for files whose extension is not in the table.
pub const FALLBACK_LABEL: &str = "text";

/// Lower-cased extension (without dot) -> fenced code block label.
static EXTENSION_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("py", "python"),
        ("js", "javascript"),
        ("ts", "typescript"),
        ("jsx", "jsx"),
        ("tsx", "tsx"),
        ("java", "java"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("cc", "cpp"),
        ("cxx", "cpp"),
        ("h", "c"),
        ("hpp", "cpp"),
        ("cs", "csharp"),
        ("php", "php"),
        ("rb", "ruby"),
        ("go", "go"),
        ("rs", "rust"),
        ("swift", "swift"),
        ("kt", "kotlin"),
        ("scala", "scala"),
        ("sh", "bash"),
        ("bash", "bash"),
        ("zsh", "zsh"),
        ("fish", "fish"),
        ("ps1", "powershell"),
        ("html", "html"),
        ("htm", "html"),
        ("css", "css"),
        ("scss", "scss"),
        ("sass", "sass"),
        ("less", "less"),
        ("xml", "xml"),
        ("json", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("toml", "toml"),
        ("ini", "ini"),
        ("cfg", "ini"),
        ("conf", "ini"),
        ("sql", "sql"),
        ("r", "r"),
        ("m", "matlab"),
        ("pl", "perl"),
        ("lua", "lua"),
        ("vim", "vim"),
        ("dockerfile", "dockerfile"),
        ("md", "markdown"),
        ("markdown", "markdown"),
        ("tex", "latex"),
        ("vue", "vue"),
        ("svelte", "svelte"),
        ("dart", "dart"),
        ("elm", "elm"),
        ("ex", "elixir"),
        ("exs", "elixir"),
        ("erl", "erlang"),
        ("hrl", "erlang"),
        ("clj", "clojure"),
        ("cljs", "clojure"),
        ("hs", "haskell"),
        ("lhs", "haskell"),
        ("ml", "ocaml"),
        ("mli", "ocaml"),
        ("fs", "fsharp"),
        ("fsx", "fsharp"),
        ("jl", "julia"),
        ("nim", "nim"),
        ("nims", "nim"),
        ("cr", "crystal"),
        ("zig", "zig"),
        ("v", "v"),
        ("sv", "systemverilog"),
        ("vhd", "vhdl"),
        ("vhdl", "vhdl"),
    ])
});

fn extension_key(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Label for `path`, falling back to [`FALLBACK_LABEL`].
pub fn label_for(path: &Path) -> &'static str {
    extension_key(path)
        .and_then(|ext| EXTENSION_LABELS.get(ext.as_str()).copied())
        .unwrap_or(FALLBACK_LABEL)
}

/// Whether `path` has an extension present in the table.
pub fn is_code_file(path: &Path) -> bool {
    extension_key(path).is_some_and(|ext| EXTENSION_LABELS.contains_key(ext.as_str()))
}
