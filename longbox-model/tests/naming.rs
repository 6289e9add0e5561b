use std::path::{Path, PathBuf};

use longbox_core::Format;
use longbox_model::*;

fn issue(format: Format, number: &str, title: Option<&str>) -> Issue {
    let mut issue = Issue::new(number);
    issue.format = format;
    issue.title = title.map(str::to_string);
    issue
}

#[test]
fn series_volume_suffix_only_past_first_volume() {
    assert_eq!(Series::new("Batman", 1).file_name(), "Batman");
    assert_eq!(Series::new("Batman", 3).file_name(), "Batman-v3");
    assert_eq!(Series::new("Spider-Man: Blue", 2).file_name(), "Spider-Man-Blue-v2");
}

#[test]
fn comic_numbers_pad_to_three() {
    assert_eq!(issue(Format::Comic, "7", None).file_name(), "-#007");
    assert_eq!(issue(Format::Comic, "1234", None).file_name(), "-#1234");
    assert_eq!(issue(Format::Comic, "-1", None).file_name(), "-#-01");
}

#[test]
fn annual_and_chapter_pad_to_two() {
    assert_eq!(issue(Format::Annual, "1", None).file_name(), "-Annual-#01");
    assert_eq!(issue(Format::DigitalChapter, "12", None).file_name(), "-Chapter-#12");
}

#[test]
fn collected_editions() {
    assert_eq!(
        issue(Format::TradePaperback, "0", Some("Year One")).file_name(),
        "-Year-One-TP"
    );
    assert_eq!(issue(Format::TradePaperback, "3", None).file_name(), "-#03-TP");
    assert_eq!(issue(Format::Hardcover, "0", None).file_name(), "-HC");
    assert_eq!(issue(Format::Hardcover, "0", Some("  ")).file_name(), "-HC");
}

#[test]
fn graphic_novel_uses_raw_title() {
    assert_eq!(
        issue(Format::GraphicNovel, "0", Some("The Killing Joke")).file_name(),
        "-The Killing Joke"
    );
    assert_eq!(issue(Format::GraphicNovel, "1", None).file_name(), "");
}

#[test]
fn zero_pad_matches_zfill() {
    assert_eq!(zero_pad("7", 3), "007");
    assert_eq!(zero_pad("-5", 3), "-05");
    assert_eq!(zero_pad("+5", 3), "+05");
    assert_eq!(zero_pad("12.5", 3), "12.5");
    assert_eq!(zero_pad("", 2), "00");
}

#[test]
fn output_path_layout() {
    let metadata = Metadata::new(
        Publisher::new("DC Comics"),
        Series::new("Batman", 3),
        issue(Format::Comic, "7", None),
    );
    assert_eq!(
        relative_output_path(&metadata, "cbz"),
        PathBuf::from("DC-Comics/Batman-v3/Batman-v3-#007.cbz")
    );
    assert_eq!(
        output_path(&metadata, Path::new("/collection"), ".cbz"),
        PathBuf::from("/collection/DC-Comics/Batman-v3/Batman-v3-#007.cbz")
    );
}

#[test]
fn output_path_does_not_mutate_input() {
    let metadata = Metadata::new(
        Publisher::new("Image"),
        Series::new("Saga", 1),
        issue(Format::Comic, "1", None),
    );
    let before = serde_json::to_value(&metadata).unwrap();
    let _ = relative_output_path(&metadata, "cbz");
    assert_eq!(serde_json::to_value(&metadata).unwrap(), before);
}
