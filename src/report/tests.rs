use {
  super::*,
  crate::{
    chart::{self, ChartStyle},
    input::{CircleForm, PointCountInput},
  },
  regex::Regex,
};

fn spec(x: f64, y: f64, radius: f64, n: i64) -> CircleSpec {
  CircleForm { center_x: x, center_y: y, radius, point_count: n, ..Default::default() }
    .validate(PointCountInput::Stepper)
    .unwrap()
}

fn date() -> NaiveDate { NaiveDate::from_ymd_opt(2026, 10, 19).unwrap() }

fn texts(lines: &[Line]) -> Vec<&str> {
  lines.iter().filter_map(Line::text).collect()
}

fn small_style() -> ChartStyle {
  ChartStyle { width: 160, height: 160, ..Default::default() }
}

#[test] fn coordinate_formatting() {
  assert_eq!(format_coordinate(5.0), "5.00");
  assert_eq!(format_coordinate(3.8660254), "3.87");
  assert_eq!(format_coordinate(-5.0), "-5.00");
  assert_eq!(format_coordinate(-9.18e-16), "0.00");
  assert_eq!(format_coordinate(-0.004), "0.00");
  assert_eq!(format_coordinate(-0.006), "-0.01");
}

#[test] fn layout_order() {
  let spec = spec(0.0, 0.0, 5.0, 4);
  let options = ReportOptions { footer: vec!["Author: someone".into()], ..Default::default() };
  let lines = ReportAssembler::new(options).with_date(date()).lines(&spec, &spec.points());
  assert_eq!(lines[0], Line::Title(DEFAULT_TITLE.to_string()));
  assert_eq!(texts(&lines), vec![
    DEFAULT_TITLE,
    "Date: 2026-10-19",
    "Center: (0.0, 0.0)",
    "Radius: 5.0 m",
    "Point count: 4",
    "Color: #0000FF",
    "Unit: m",
    "Point coordinates:",
    "Point 1: (5.00, 0.00)",
    "Point 2: (0.00, 5.00)",
    "Point 3: (-5.00, 0.00)",
    "Point 4: (0.00, -5.00)",
    "Author: someone",
  ]);
}

#[test] fn date_is_optional() {
  let spec = spec(1.5, -2.0, 1.0, 3);
  let options = ReportOptions { include_date: false, ..Default::default() };
  let lines = ReportAssembler::new(options).lines(&spec, &spec.points());
  assert!(texts(&lines).iter().all(|line| !line.starts_with("Date:")));
  assert_eq!(texts(&lines)[1], "Center: (1.5, -2.0)");
}

#[test] fn listing_round_trip() {
  let spec = spec(-3.25, 12.0, 7.5, 37);
  let points = spec.points();
  let lines = ReportAssembler::default().lines(&spec, &points);
  let re = Regex::new(r"^Point (\d+): \((-?\d+\.\d{2}), (-?\d+\.\d{2})\)$").unwrap();
  let parsed = texts(&lines).into_iter()
    .filter_map(|line| re.captures(line))
    .map(|c| (
      c[1].parse::<usize>().unwrap(),
      c[2].parse::<f64>().unwrap(),
      c[3].parse::<f64>().unwrap()
    ))
    .collect::<Vec<_>>();
  assert_eq!(parsed.len(), points.len());
  parsed.iter().zip(points.iter()).enumerate().for_each(|(i, (&(index, x, y), point))| {
    assert_eq!(index, i + 1);
    assert!((x - point.x).abs() <= 0.005 + 1e-9, "x of point {}", index);
    assert!((y - point.y).abs() <= 0.005 + 1e-9, "y of point {}", index);
  });
}

#[test] fn assembles_pdf_without_image() -> Result<()> {
  let spec = spec(2.0, 3.0, 1.0, 3);
  let report = ReportAssembler::default().with_date(date())
    .assemble(&spec, &spec.points(), None)?;
  assert!(report.bytes.starts_with(b"%PDF"));
  assert_eq!(report.image, ImageStatus::NotRequested);
  assert_eq!(report.pages, 1);
  Ok(())
}

#[test] fn embeds_staged_chart() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let spec = spec(0.0, 0.0, 5.0, 8);
  let points = spec.points();
  let path = chart::stage_chart(&spec, &points, &small_style(), &dir.path().join("chart.png"))?;

  let assembler = ReportAssembler::default().with_date(date());
  let with_image = assembler.assemble(&spec, &points, Some(&path))?;
  assert_eq!(with_image.image, ImageStatus::Embedded { path: path.clone() });

  let without = ReportAssembler::new(ReportOptions { include_image: false, ..Default::default() })
    .with_date(date())
    .assemble(&spec, &points, Some(&path))?;
  assert_eq!(without.image, ImageStatus::NotRequested);
  assert!(with_image.bytes.len() > without.bytes.len());
  Ok(())
}

#[test] fn missing_image_is_flagged_when_omitting() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let missing = dir.path().join("nope.png");
  let spec = spec(0.0, 0.0, 5.0, 4);
  let report = ReportAssembler::default().assemble(&spec, &spec.points(), Some(&missing))?;
  assert!(report.bytes.starts_with(b"%PDF"));
  match report.image {
    ImageStatus::Omitted { path, .. } => assert_eq!(path, missing),
    other => panic!("expected omitted image, got {:?}", other),
  }
  Ok(())
}

#[test] fn missing_image_fails_when_strict() {
  let dir = tempfile::tempdir().unwrap();
  let missing = dir.path().join("nope.png");
  let spec = spec(0.0, 0.0, 5.0, 4);
  let options = ReportOptions { missing_image: MissingImagePolicy::Fail, ..Default::default() };
  match ReportAssembler::new(options).assemble(&spec, &spec.points(), Some(&missing)) {
    Err(Error::ResourceMissing { path }) => assert_eq!(path, missing),
    other => panic!("expected ResourceMissing, got {:?}", other.map(|r| r.image)),
  }
}

#[test] fn undecodable_image_follows_policy() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let broken = dir.path().join("broken.png");
  std::fs::write(&broken, b"not a png")?;
  let spec = spec(0.0, 0.0, 5.0, 4);

  let report = ReportAssembler::default().assemble(&spec, &spec.points(), Some(&broken))?;
  assert!(matches!(report.image, ImageStatus::Omitted { .. }));

  let options = ReportOptions { missing_image: MissingImagePolicy::Fail, ..Default::default() };
  let strict = ReportAssembler::new(options).assemble(&spec, &spec.points(), Some(&broken));
  assert!(matches!(strict, Err(Error::Image(_))));
  Ok(())
}

#[test] fn long_listing_paginates() -> Result<()> {
  let spec = spec(0.0, 0.0, 100.0, 500);
  let report = ReportAssembler::default().assemble(&spec, &spec.points(), None)?;
  // 500 lines of 7 mm on 257 mm of printable height
  assert!(report.pages >= 14, "pages = {}", report.pages);
  Ok(())
}

#[test] fn writes_document() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let spec = spec(0.0, 0.0, 5.0, 4);
  let report = ReportAssembler::default().assemble(&spec, &spec.points(), None)?;
  let path = dir.path().join("out/report.pdf");
  let size = report.write_to(&path)?;
  assert_eq!(size, std::fs::metadata(&path)?.len());
  assert_eq!(std::fs::read(&path)?, report.bytes);
  Ok(())
}
