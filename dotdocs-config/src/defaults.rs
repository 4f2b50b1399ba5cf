/// Name of the optional override file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "dotfiles-docs.toml";

/// Configuration files tracked by the dotfiles repository, as `(name, path)`
/// pairs relative to the repository root. Order is report order.
pub const CONFIG_FILES: &[(&str, &str)] = &[
    ("neovim", "nvim/.config/nvim/init.lua"),
    ("tmux", "tmux/.tmux.conf"),
    ("aerospace", "aerospace/.config/aerospace/aerospace.toml"),
    ("yazi", "yazi/keymap.toml"),
    ("cursor_keys", "cursor/keybindings.json"),
    ("cursor_vim", "cursor/settings.json"),
    ("ideavim", "ideavim/.ideavimrc"),
    ("zsh", "zsh/.zshrc"),
];

/// Documentation pages that must exist, relative to the repository root.
pub const REQUIRED_DOCS: &[&str] = &[
    "docs/index.md",
    "docs/quick-reference.md",
    "docs/about.md",
    "docs/tools/neovim.md",
    "docs/tools/tmux.md",
    "docs/tools/aerospace.md",
    "docs/tools/yazi.md",
    "docs/tools/cursor.md",
    "docs/tools/ideavim.md",
    "docs/tools/zsh.md",
];

/// Directory holding one `<tool>.md` page per tool.
pub const TOOLS_DIR: &str = "docs/tools";

/// Tools whose documented shortcuts are counted.
pub const TOOLS: &[&str] = &[
    "neovim",
    "tmux",
    "aerospace",
    "yazi",
    "cursor",
    "ideavim",
    "zsh",
];

pub const SERVE_COMMAND: &str = "mkdocs serve";
pub const DEPLOY_COMMAND: &str = "mkdocs gh-deploy";

/// Tracing targets enabled when `RUST_LOG` is not set.
pub const TRACE_TARGETS: &[&str] = &["dotfiles_docs", "dotdocs_config", "dotdocs_core"];
