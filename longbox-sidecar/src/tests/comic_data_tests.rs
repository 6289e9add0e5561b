use super::*;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ComicData>
  <Data>
    <Publisher>
      <Title>Image</Title>
      <Identifiers>
        <Identifier><Service>Comicvine</Service><ID>513</ID></Identifier>
      </Identifiers>
    </Publisher>
    <Series>
      <Title>Saga</Title>
      <Volume>2</Volume>
      <Identifiers>
        <Identifier><Service>Metron</Service><ID>42</ID></Identifier>
        <Identifier><Service>Somewhere Else</Service><ID>1</ID></Identifier>
      </Identifiers>
    </Series>
    <Comic>
      <Format>Comic</Format>
      <Number>7</Number>
      <CoverDate>2012-11-01</CoverDate>
      <StoreDate>2012-11-14</StoreDate>
      <PageCount>32</PageCount>
      <Summary>Alana and Marko.</Summary>
      <LanguageISO>EN</LanguageISO>
      <Creators>
        <Creator>
          <Name>Brian K. Vaughan</Name>
          <Roles><Role>Writer</Role></Roles>
        </Creator>
        <Creator>
          <Name>Fiona Staples</Name>
          <Roles><Role>Artist</Role><Role>Cover</Role></Roles>
        </Creator>
      </Creators>
      <Genres><Genre>Science Fiction</Genre><Genre>Fantasy</Genre></Genres>
      <Identifiers>
        <Identifier><Service>Grand Comics Database</Service><ID>99</ID></Identifier>
        <Identifier><Service>Comixology</Service><URL>https://comixology.com/saga-7</URL></Identifier>
      </Identifiers>
    </Comic>
  </Data>
  <Meta>
    <Date>2024-01-01</Date>
    <Tool><Name>longbox</Name><Version>0.1.0</Version></Tool>
    <Notes>Imported</Notes>
  </Meta>
</ComicData>"#;

struct Answers(Vec<&'static str>);

impl FieldPrompt for Answers {
    fn prompt(&mut self, _field: PromptField) -> Result<Option<String>, SidecarError> {
        Ok(self.0.pop().map(str::to_string))
    }
}

#[test]
fn parses_nested_blocks() {
    let m = ComicData.parse(SAMPLE.as_bytes()).unwrap();
    assert_eq!(m.publisher.title, "Image");
    assert_eq!(m.publisher.sources.comicvine, Some(513));
    assert_eq!(m.series.title, "Saga");
    assert_eq!(m.series.volume, 2);
    assert_eq!(m.series.start_year, None);
    assert_eq!(m.series.sources.metron, Some(42));
    assert_eq!(m.issue.number, "7");
    assert_eq!(m.issue.cover_date, NaiveDate::from_ymd_opt(2012, 11, 1));
    assert_eq!(m.issue.store_date, NaiveDate::from_ymd_opt(2012, 11, 14));
    assert_eq!(m.issue.page_count, 32);
    assert_eq!(m.issue.language, "en");
    assert_eq!(m.issue.sources.grand_comics_database, Some(99));
    assert_eq!(m.issue.sources.comixology.as_deref(), Some("https://comixology.com/saga-7"));
    assert_eq!(m.notes.as_deref(), Some("Imported"));
}

#[test]
fn parses_creators_and_genres() {
    let m = ComicData.parse(SAMPLE.as_bytes()).unwrap();
    assert_eq!(m.issue.creators.len(), 2);
    let staples = m.issue.creator("Fiona Staples").unwrap();
    assert!(staples.roles.contains(&Role::Artist));
    assert!(staples.roles.contains(&Role::CoverArtist));
    assert!(m.issue.genres.contains(&Genre::ScienceFiction));
    assert!(m.issue.genres.contains(&Genre::Fantasy));
}

#[test]
fn volume_past_1900_is_a_start_year() {
    let raw = SAMPLE.replace("<Volume>2</Volume>", "<Volume>2012</Volume>");
    let m = ComicData.parse(raw.as_bytes()).unwrap();
    assert_eq!(m.series.volume, 1);
    assert_eq!(m.series.start_year, Some(2012));
}

#[test]
fn bad_dates_are_rejected() {
    let raw = SAMPLE.replace("2012-11-01", "November 2012");
    assert!(matches!(
        ComicData.parse(raw.as_bytes()),
        Err(SidecarError::Invalid(_))
    ));
}

#[test]
fn unnumbered_collection_prompts_for_title() {
    let raw = "<ComicData><Data><Publisher><Title>Image</Title></Publisher>\
               <Series><Title>Saga</Title></Series>\
               <Comic><Format>Trade Paperback</Format><Number>0</Number></Comic>\
               </Data></ComicData>";
    let mut answers = Answers(vec!["Volume One"]);
    let m = ComicData.parse_with(raw.as_bytes(), &mut answers).unwrap();
    assert_eq!(m.issue.format, Format::TradePaperback);
    assert_eq!(m.issue.title.as_deref(), Some("Volume One"));

    // Without an answer the title simply stays empty.
    let m = ComicData.parse(raw.as_bytes()).unwrap();
    assert_eq!(m.issue.title, None);
}

#[test]
fn missing_series_is_an_error_without_prompt() {
    let raw = "<ComicData><Data><Publisher><Title>Image</Title></Publisher>\
               <Comic><Number>1</Number></Comic></Data></ComicData>";
    let err = ComicData.parse(raw.as_bytes()).unwrap_err();
    assert!(matches!(err, SidecarError::MissingField(PromptField::SeriesTitle)));
}

#[test]
fn serialize_then_parse_keeps_the_mapped_fields() {
    let original = ComicData.parse(SAMPLE.as_bytes()).unwrap();
    let raw = ComicData.serialize(&original).unwrap();
    let text = String::from_utf8(raw.clone()).unwrap();
    assert!(text.contains("<LanguageISO>EN</LanguageISO>"));
    assert!(text.contains("<Service>Comixology</Service>"));
    assert!(text.contains("<Name>longbox</Name>"));

    let again = ComicData.parse(&raw).unwrap();
    assert_eq!(again.publisher.sources, original.publisher.sources);
    assert_eq!(again.series.sources, original.series.sources);
    assert_eq!(again.issue.sources, original.issue.sources);
    assert_eq!(again.issue.store_date, original.issue.store_date);
    assert_eq!(again.issue.genres, original.issue.genres);
    assert_eq!(again.issue.creators.len(), 2);
    assert_eq!(
        again.issue.creator("Fiona Staples").unwrap().roles,
        original.issue.creator("Fiona Staples").unwrap().roles
    );
    assert_eq!(again.notes, original.notes);
}
