use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG_FILES: &[&str] = &[
    "nvim/.config/nvim/init.lua",
    "tmux/.tmux.conf",
    "aerospace/.config/aerospace/aerospace.toml",
    "yazi/keymap.toml",
    "cursor/keybindings.json",
    "cursor/settings.json",
    "ideavim/.ideavimrc",
    "zsh/.zshrc",
];

const TOOLS: &[&str] = &["neovim", "tmux", "aerospace", "yazi", "cursor", "ideavim", "zsh"];

fn write(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// A dotfiles checkout with every tracked file present.
fn dotfiles_repo() -> Result<TempDir> {
    let temp = TempDir::new()?;
    for path in CONFIG_FILES {
        write(temp.path(), path, "")?;
    }
    for page in ["docs/index.md", "docs/quick-reference.md", "docs/about.md"] {
        write(temp.path(), page, "# Dotfiles\n")?;
    }
    for tool in TOOLS {
        write(temp.path(), &format!("docs/tools/{tool}.md"), "# Keys\n")?;
    }
    Ok(temp)
}

fn dotfiles_docs(root: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("dotfiles-docs")?;
    cmd.current_dir(root).env("NO_COLOR", "1").env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn complete_repository_reports_statistics() -> Result<()> {
    let repo = dotfiles_repo()?;
    write(
        repo.path(),
        "docs/tools/tmux.md",
        "| ++ctrl+a++ ++c++ | new window |\n| ++Ctrl+A++ ++n++ | next window |\n",
    )?;
    write(
        repo.path(),
        "docs/tools/neovim.md",
        "++space+f+f++ files, ++space+f+g++ grep, ++gd++ definition",
    )?;
    write(repo.path(), "docs/tools/zsh.md", "++Ctrl+R++ and ++CTRL+R++")?;

    let output = dotfiles_docs(repo.path())?.output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.starts_with("Dotfiles Documentation Update Helper\n"));
    let expected = [
        ("Neovim", 3),
        ("Tmux", 3),
        ("Aerospace", 0),
        ("Yazi", 0),
        ("Cursor", 0),
        ("Ideavim", 0),
        ("Zsh", 1),
    ];
    for (name, count) in expected {
        assert!(
            stdout.contains(&format!("  {name}: {count} shortcuts\n")),
            "missing line for {name} in:\n{stdout}"
        );
    }
    let sum: usize = expected.iter().map(|(_, count)| count).sum();
    assert!(stdout.contains(&format!("  Total: {sum} shortcuts documented\n")));
    assert!(stdout.contains("✅ All checks passed!"));
    assert!(stdout.contains("  mkdocs serve\n"));
    assert!(stdout.contains("  mkdocs gh-deploy\n"));
    Ok(())
}

#[test]
fn missing_config_file_exits_with_failure() -> Result<()> {
    let repo = dotfiles_repo()?;
    fs::remove_file(repo.path().join("tmux/.tmux.conf"))?;

    dotfiles_docs(repo.path())?
        .assert()
        .code(1)
        .stdout(predicate::str::contains("tmux/.tmux.conf NOT FOUND"))
        .stdout(predicate::str::contains(
            "❌ Some files are missing. Please check the output above.",
        ))
        .stdout(predicate::str::contains("Documentation Statistics:").not())
        .stdout(predicate::str::contains("Total:").not());
    Ok(())
}

#[test]
fn missing_doc_page_exits_with_failure() -> Result<()> {
    let repo = dotfiles_repo()?;
    fs::remove_file(repo.path().join("docs/tools/ideavim.md"))?;

    dotfiles_docs(repo.path())?
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  ✗ docs/tools/ideavim.md NOT FOUND\n"))
        .stdout(predicate::str::contains("Documentation Statistics:").not());
    Ok(())
}

#[test]
fn empty_directory_lists_every_missing_file() -> Result<()> {
    let temp = TempDir::new()?;

    let output = dotfiles_docs(temp.path())?.output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.matches("NOT FOUND").count(), 18);
    Ok(())
}

#[test]
fn workspace_argument_overrides_current_directory() -> Result<()> {
    let repo = dotfiles_repo()?;
    let elsewhere = TempDir::new()?;

    dotfiles_docs(elsewhere.path())?
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  Total: 0 shortcuts documented\n"));
    Ok(())
}

#[test]
fn workspace_manifest_narrows_the_checks() -> Result<()> {
    let temp = TempDir::new()?;
    write(temp.path(), "zsh/.zshrc", "")?;
    write(temp.path(), "docs/tools/zsh.md", "++ctrl+r++ ++ctrl+t++")?;
    write(
        temp.path(),
        "dotfiles-docs.toml",
        "[config_files]\nzsh = \"zsh/.zshrc\"\n\n[docs]\nrequired = [\"docs/tools/zsh.md\"]\n\n[tools]\nnames = [\"zsh\"]\n\n[site]\nserve_command = \"zensical serve\"\n",
    )?;

    dotfiles_docs(temp.path())?
        .assert()
        .success()
        .stdout(predicate::str::contains("  Zsh: 2 shortcuts\n"))
        .stdout(predicate::str::contains("  Total: 2 shortcuts documented\n"))
        .stdout(predicate::str::contains("  zensical serve\n"))
        .stdout(predicate::str::contains("Neovim").not());
    Ok(())
}

#[test]
fn invalid_manifest_is_reported_on_stderr() -> Result<()> {
    let repo = dotfiles_repo()?;
    write(repo.path(), "dotfiles-docs.toml", "[tools]\nnames = [\"../escape\"]\n")?;

    dotfiles_docs(repo.path())?
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid manifest"));
    Ok(())
}

#[test]
fn never_color_keeps_output_plain() -> Result<()> {
    let repo = dotfiles_repo()?;

    dotfiles_docs(repo.path())?
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
    Ok(())
}

#[test]
fn always_color_styles_the_report() -> Result<()> {
    let repo = dotfiles_repo()?;

    dotfiles_docs(repo.path())?
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains("All checks passed!"));
    Ok(())
}

#[test]
fn auto_color_strips_styles_when_piped() -> Result<()> {
    let repo = dotfiles_repo()?;

    dotfiles_docs(repo.path())?
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not())
        .stdout(predicate::str::contains("  ✓ docs/index.md\n"));
    Ok(())
}

#[test]
fn manifest_loading_is_logged_when_requested() -> Result<()> {
    let repo = dotfiles_repo()?;
    write(repo.path(), "dotfiles-docs.toml", "[tools]\nnames = [\"zsh\"]\n")?;

    dotfiles_docs(repo.path())?
        .env("RUST_LOG", "dotdocs_config=debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded manifest override"))
        .stdout(predicate::str::contains("  Zsh: 0 shortcuts\n"));
    Ok(())
}

#[test]
fn unreadable_tool_page_aborts_the_run() -> Result<()> {
    let repo = dotfiles_repo()?;
    fs::write(repo.path().join("docs/tools/tmux.md"), [0xff, 0xfe, b'+'])?;

    dotfiles_docs(repo.path())?
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Documentation check aborted"))
        .stdout(predicate::str::contains("All checks passed").not());
    Ok(())
}
