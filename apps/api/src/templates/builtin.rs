//! Built-in resume templates.
//!
//! Templates are immutable markup strings with uppercase bracket
//! placeholders; the renderer never interprets anything else in them, so
//! layout and styling live entirely here.

/// Classic single-column layout driven by section placeholders.
pub const CLASSIC: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{FULL_NAME}</title>
<style>
  body { font-family: Georgia, serif; color: #222; max-width: 48rem; margin: 2rem auto; }
  header { text-align: center; border-bottom: 2px solid #222; padding-bottom: 1rem; }
  h1 { margin: 0; font-size: 2rem; }
  .tagline { font-style: italic; color: #555; }
  .contact { font-size: 0.9rem; color: #444; }
  h2 { font-size: 1.1rem; text-transform: uppercase; letter-spacing: 0.08em; border-bottom: 1px solid #999; }
  .entry { margin-bottom: 0.8rem; }
  .entry-heading { display: flex; justify-content: space-between; font-weight: bold; }
  .entry-subheading { display: flex; justify-content: space-between; color: #555; }
  ul.skill-list, ul.achievement-list { columns: 2; margin: 0; padding-left: 1.2rem; }
</style>
</head>
<body>
<header>
  <h1>{FULL_NAME}</h1>
  <div class="tagline">{TAGLINE}</div>
  <div class="contact">{EMAIL} | {PHONE} | {LOCATION}</div>
</header>
<section>
  <h2>Summary</h2>
  <p>{SUMMARY}</p>
</section>
<section>
  <h2>Experience</h2>
  {WORK_EXPERIENCE}
</section>
<section>
  <h2>Education</h2>
  {EDUCATION}
</section>
<section>
  <h2>Skills</h2>
  <ul class="skill-list">{SKILLS}</ul>
</section>
<section>
  <h2>Achievements</h2>
  <ul class="achievement-list">{ACHIEVEMENTS}</ul>
</section>
<section>
  <h2>References</h2>
  {REFERENCES}
</section>
</body>
</html>
"#;

/// Modern two-tone layout; same placeholder set as CLASSIC, different shell.
pub const MODERN: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{FULL_NAME}</title>
<style>
  body { font-family: 'Helvetica Neue', Arial, sans-serif; color: #1a1a2e; margin: 0; }
  .banner { background: #16324f; color: #fff; padding: 2rem 3rem; }
  .banner h1 { margin: 0 0 0.3rem 0; font-size: 2.2rem; }
  .banner .tagline { opacity: 0.85; }
  .banner .contact { margin-top: 0.6rem; font-size: 0.85rem; opacity: 0.75; }
  main { padding: 1.5rem 3rem; max-width: 52rem; }
  h2 { color: #16324f; font-size: 1rem; text-transform: uppercase; letter-spacing: 0.1em; }
  .entry { margin-bottom: 1rem; }
  .entry-heading { display: flex; justify-content: space-between; font-weight: 600; }
  .entry-subheading { display: flex; justify-content: space-between; color: #5c6b7a; font-size: 0.9rem; }
  ul.skill-list { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 0.4rem; }
  ul.skill-list li { background: #e8eef4; border-radius: 3px; padding: 0.15rem 0.5rem; }
</style>
</head>
<body>
<div class="banner">
  <h1>{FULL_NAME}</h1>
  <div class="tagline">{TAGLINE}</div>
  <div class="contact">{EMAIL} | {PHONE} | {LOCATION}</div>
</div>
<main>
  <h2>Profile</h2>
  <p>{SUMMARY}</p>
  <h2>Experience</h2>
  {WORK_EXPERIENCE}
  <h2>Education</h2>
  {EDUCATION}
  <h2>Skills</h2>
  <ul class="skill-list">{SKILLS}</ul>
  <h2>Achievements</h2>
  <ul class="achievement-list">{ACHIEVEMENTS}</ul>
</main>
</body>
</html>
"#;

/// Compact one-page layout. Exercises indexed placeholders: it pins the two
/// most recent positions and the first education entry rather than
/// expanding whole sections. Extra entries simply do not appear; with fewer
/// entries the unused slots collapse via the cleanup rule.
pub const COMPACT: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{FULL_NAME}</title>
<style>
  body { font-family: Arial, sans-serif; font-size: 0.85rem; color: #111; max-width: 44rem; margin: 1.5rem auto; }
  h1 { margin: 0; font-size: 1.5rem; }
  .contact { color: #444; margin-bottom: 0.8rem; }
  h2 { font-size: 0.95rem; margin: 0.8rem 0 0.2rem 0; border-bottom: 1px solid #ccc; }
  .slot { margin-bottom: 0.5rem; }
  .slot-heading { font-weight: bold; }
</style>
</head>
<body>
<h1>{FULL_NAME}</h1>
<div class="contact">{EMAIL} | {PHONE} | {LOCATION}</div>
<p>{SUMMARY}</p>
<h2>Recent Experience</h2>
<div class="slot">
  <div class="slot-heading">{JOB_TITLE_1}, {COMPANY_1} ({START_DATE_1} - {END_DATE_1})</div>
  <div>{JOB_DESCRIPTION_1}</div>
</div>
<div class="slot">
  <div class="slot-heading">{JOB_TITLE_2}, {COMPANY_2} ({START_DATE_2} - {END_DATE_2})</div>
  <div>{JOB_DESCRIPTION_2}</div>
</div>
<h2>Education</h2>
<div class="slot">
  <div class="slot-heading">{DEGREE_1}, {INSTITUTION_1} ({GRADUATION_DATE_1})</div>
</div>
<h2>Key Skills</h2>
<div>{SKILL_1} {SKILL_2} {SKILL_3} {SKILL_4} {SKILL_5} {SKILL_6}</div>
</body>
</html>
"#;
