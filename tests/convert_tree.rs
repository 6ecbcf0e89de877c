//! Integration tests for converting a documentation tree

mod common;

use common::TestWorkspace;
use gitbook2docusaurus::converter::{
    ConvertError, ConvertOptions, FileConverter, TreeWalker, WarningKind,
};

fn walk(workspace: &TestWorkspace) -> gitbook2docusaurus::converter::BatchReport {
    TreeWalker::new(FileConverter::new(ConvertOptions::default()))
        .walk(&workspace.docs())
        .unwrap()
}

#[test]
fn test_full_document_conversion() {
    let workspace = TestWorkspace::new();
    let md = r#"# Getting Started

{% hint style="info" %}
Install the CLI first.
{% endhint %}

{% tabs %}
{% tab title="macOS" %}
brew install tool
{% endtab %}
{% tab title="Linux" %}
apt install tool
{% endtab %}
{% endtabs %}

{{< youtube dQw4w9WgXcQ >}}
"#;
    workspace.create_file("guide/start.md", md);

    let batch = walk(&workspace);
    assert_eq!(batch.files_converted, 1);

    let expected = r#"# Getting Started

> 💡 **Info**
> Install the CLI first.

import Tabs from '@theme/Tabs';
import TabItem from '@theme/TabItem';

<Tabs>
<TabItem value="macos" label="macOS">
brew install tool
</TabItem>
<TabItem value="linux" label="Linux">
apt install tool
</TabItem>
</Tabs>

<iframe width="100%" height="400" src="https://www.youtube.com/embed/dQw4w9WgXcQ" frameborder="0" allowfullscreen></iframe>"#;
    assert_eq!(workspace.read("guide/start.md"), expected);
    assert_eq!(workspace.read("guide/start.md.bak"), md);
}

#[test]
fn test_untriggered_files_are_left_alone() {
    let workspace = TestWorkspace::new();
    let plain = "# Plain\n\nNo directives {% raw %} here.\n";
    workspace.create_file("plain.md", plain);
    workspace.create_file("nested/deeper/also-plain.md", plain);
    workspace.create_file("notes.txt", "{% hint style=\"info\" %}\n");

    let batch = walk(&workspace);

    assert_eq!(batch.files_scanned, 2);
    assert_eq!(batch.files_converted, 0);
    assert_eq!(workspace.read("plain.md"), plain);
    assert_eq!(workspace.read("nested/deeper/also-plain.md"), plain);
    assert_eq!(workspace.read("notes.txt"), "{% hint style=\"info\" %}\n");
    assert!(!workspace.exists("plain.md.bak"));
    assert!(!workspace.exists("notes.txt.bak"));
}

#[test]
fn test_rerun_is_a_fixed_point() {
    let workspace = TestWorkspace::new();
    let original = "{% hint style=\"warning\" %}\nCareful\n{% endhint %}\n";
    workspace.create_file("page.md", original);

    walk(&workspace);
    let converted = workspace.read("page.md");
    let batch = walk(&workspace);

    assert_eq!(batch.files_converted, 0);
    assert_eq!(batch.files_skipped, 1);
    assert_eq!(workspace.read("page.md"), converted);
    assert_eq!(workspace.read("page.md.bak"), original);
}

#[test]
fn test_unterminated_hint_is_reported_not_fatal() {
    let workspace = TestWorkspace::new();
    workspace.create_file("open.md", "{% hint style=\"danger\" %}\none\ntwo");

    let batch = walk(&workspace);

    assert_eq!(workspace.read("open.md"), "> 💡 **Danger**\n> one\n> two");
    assert_eq!(batch.total_warnings, 1);
    assert_eq!(batch.files[0].warnings[0].kind, WarningKind::UnclosedBlock);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let workspace = TestWorkspace::new();
    let md = "{{< youtube abc123 >}}\n";
    workspace.create_file("video.md", md);

    let batch = TreeWalker::new(FileConverter::new(ConvertOptions::new().with_dry_run(true)))
        .walk(&workspace.docs())
        .unwrap();

    assert!(batch.dry_run);
    assert_eq!(batch.files_converted, 1);
    assert_eq!(workspace.read("video.md"), md);
    assert!(!workspace.exists("video.md.bak"));
    assert!(batch.to_json().unwrap().contains("\"files_converted\": 1"));
}

#[test]
fn test_invalid_utf8_aborts_the_walk() {
    let workspace = TestWorkspace::new();
    let triggered = "{% tabs %}\n{% endtabs %}";
    workspace.create_file("a.md", triggered);
    std::fs::write(workspace.docs().join("b.md"), [0xff, 0xfe, 0x00]).unwrap();
    workspace.create_file("c.md", triggered);

    let err = TreeWalker::new(FileConverter::new(ConvertOptions::default()))
        .walk(&workspace.docs())
        .unwrap_err();

    let ConvertError::Read { path, .. } = &err else {
        panic!("expected a read error, got {:?}", err);
    };
    assert_eq!(path, &workspace.docs().join("b.md"));

    // Files before the failure stay converted
    assert_eq!(workspace.read("a.md.bak"), triggered);
    assert_ne!(workspace.read("a.md"), triggered);
    // Files after it are never reached
    assert_eq!(workspace.read("c.md"), triggered);
    assert!(!workspace.exists("c.md.bak"));
    assert!(!workspace.exists("b.md.bak"));
    assert!(workspace.root_path().exists());
}

#[cfg(unix)]
#[test]
fn test_symlinked_alias_converts_each_file_once() {
    let workspace = TestWorkspace::new();
    // The unmatched bare hint survives conversion, so a second visit would re-trigger
    let original = "{% hint %}\n{% tabs %}\n{% endtabs %}";
    workspace.create_file("guide/page.md", original);
    std::os::unix::fs::symlink(workspace.docs().join("guide"), workspace.docs().join("alias"))
        .unwrap();

    let batch = walk(&workspace);

    assert_eq!(batch.files_converted, 1);
    assert_eq!(workspace.read("guide/page.md.bak"), original);
    assert!(workspace.read("guide/page.md").contains("<Tabs>"));
}
