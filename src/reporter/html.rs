//! HTML renderer: composes the page template and static assets into a
//! self-contained report directory
//!
//! The normalized report is spliced into the page as a `report-data`
//! script block that the bundled `app.js` reads at load time. Re-running
//! with identical input produces byte-identical files; nothing
//! time-dependent is embedded.

use crate::Report;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_INDEX: &str = include_str!("../../templates/index.html");
const BUILTIN_STYLE: &str = include_str!("../../templates/style.css");
const BUILTIN_APP: &str = include_str!("../../templates/app.js");

/// Asset files written next to the generated `index.html`
const STATIC_ASSETS: &[&str] = &["style.css", "app.js"];

/// Marker the report block is spliced in front of. Only the first
/// occurrence is substituted; templates are controlled assets and keep
/// the marker out of comments and inline scripts.
const BODY_CLOSE: &str = "</body>";

/// Where template files come from
#[derive(Debug, Clone)]
enum TemplateSource {
    /// Assets compiled into the binary
    Builtin,
    /// User-supplied template root; a missing file there is fatal
    Dir(PathBuf),
}

/// Renderer that writes the static report artifact
#[derive(Debug, Clone)]
pub struct HtmlReporter {
    source: TemplateSource,
}

struct Template {
    index: String,
    assets: Vec<(&'static str, String)>,
}

impl HtmlReporter {
    /// Render with the template assets bundled into the binary
    pub fn builtin() -> Self {
        Self {
            source: TemplateSource::Builtin,
        }
    }

    /// Render with templates from an explicit directory, for customized
    /// templates and for tests
    pub fn with_template_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: TemplateSource::Dir(dir.into()),
        }
    }

    /// Write `index.html`, `style.css` and `app.js` into `out_dir`,
    /// creating it if needed. Returns the path of the generated page.
    pub fn write(&self, report: &Report, out_dir: &Path) -> Result<PathBuf> {
        // Every template asset must load before anything is written: a
        // missing asset aborts with no partial artifact on disk.
        let template = self.load_template()?;
        let html = splice_report(&template.index, report)?;

        fs::create_dir_all(out_dir).with_context(|| {
            format!("Failed to create output directory {}", out_dir.display())
        })?;

        for (name, content) in &template.assets {
            let dest = out_dir.join(name);
            fs::write(&dest, content)
                .with_context(|| format!("Failed to write {}", dest.display()))?;
        }

        let index_path = out_dir.join("index.html");
        fs::write(&index_path, html)
            .with_context(|| format!("Failed to write {}", index_path.display()))?;
        Ok(index_path)
    }

    fn load_template(&self) -> Result<Template> {
        match &self.source {
            TemplateSource::Builtin => Ok(Template {
                index: BUILTIN_INDEX.to_string(),
                assets: vec![
                    (STATIC_ASSETS[0], BUILTIN_STYLE.to_string()),
                    (STATIC_ASSETS[1], BUILTIN_APP.to_string()),
                ],
            }),
            TemplateSource::Dir(dir) => {
                let index = read_template_file(dir, "index.html")?;
                let mut assets = Vec::with_capacity(STATIC_ASSETS.len());
                for name in STATIC_ASSETS {
                    assets.push((*name, read_template_file(dir, name)?));
                }
                Ok(Template { index, assets })
            }
        }
    }
}

/// Write the bundled template assets into `dir` so they can be customized
/// and used via `templateDir` / `--template-dir`.
pub fn export_builtin_templates(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create template directory {}", dir.display()))?;
    let files = [
        ("index.html", BUILTIN_INDEX),
        ("style.css", BUILTIN_STYLE),
        ("app.js", BUILTIN_APP),
    ];
    for (name, content) in files {
        let dest = dir.join(name);
        fs::write(&dest, content)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
    }
    Ok(())
}

fn read_template_file(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    if !path.exists() {
        bail!("Missing template asset: {}", path.display());
    }
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read template asset {}", path.display()))
}

/// Serialize the report and splice it before the first closing body tag,
/// wrapped as a JSON script block with the `report-data` identifier.
fn splice_report(template: &str, report: &Report) -> Result<String> {
    if !template.contains(BODY_CLOSE) {
        bail!("Template index.html has no closing body tag to splice report data into");
    }
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report data")?;
    let block = format!(
        "  <script id=\"report-data\" type=\"application/json\">{}</script>\n{}",
        escape_json_for_script(&json),
        BODY_CLOSE
    );
    Ok(template.replacen(BODY_CLOSE, &block, 1))
}

/// Escapes a serialized JSON document for embedding inside a script
/// block: no `</script>` may survive or the block would terminate early.
/// `<\/script>` is still a valid JSON escape for the same characters.
fn escape_json_for_script(s: &str) -> String {
    s.replace("</script>", "<\\/script>")
}
