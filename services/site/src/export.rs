use clap::Args;
use portfolio::assets;
use portfolio::config::{AppConfig, SiteConfig};
use portfolio::content::{Collection, ContentError};
use portfolio::error::AppError;
use portfolio::page::{ComposeContext, PageComposer, Route};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ContentListArgs {
    /// Collection to list (publications, experience, education, certifications, testimonials, projects)
    pub(crate) collection: String,
    /// Category label or slug to filter by, e.g. "AI" or "leadership"
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Print the records as pretty JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Directory the static site is written to
    #[arg(long, default_value = "dist")]
    pub(crate) out: PathBuf,
}

pub(crate) fn run_content_list(args: ContentListArgs) -> Result<(), AppError> {
    let ContentListArgs {
        collection,
        category,
        json,
    } = args;

    let collection =
        Collection::parse(&collection).ok_or(ContentError::UnknownCollection(collection))?;
    let records = collection.records(category.as_deref())?;

    if json {
        println!("{}", render_json(&records)?);
        return Ok(());
    }

    println!(
        "{} ({} record{})",
        collection,
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );
    if let Some(category) = category.as_deref().filter(|raw| !raw.trim().is_empty()) {
        println!("Filtered by category: {category}");
    }
    let labels = collection.category_labels();
    if !labels.is_empty() {
        println!("Categories: {}", labels.join(" | "));
    }
    for record in &records {
        println!("{}", summary_line(record));
    }
    Ok(())
}

fn render_json(records: &[Value]) -> Result<String, ContentError> {
    serde_json::to_string_pretty(records).map_err(ContentError::Serialize)
}

/// One line per record: id, headline, and category when the record has one.
fn summary_line(record: &Value) -> String {
    let id = record["id"].as_str().unwrap_or("?");
    let headline = ["title", "degree", "author", "role"]
        .iter()
        .find_map(|key| record[*key].as_str())
        .unwrap_or("");
    match record["category"].as_str() {
        Some(category) => format!("  - [{category}] {id}: {headline}"),
        None => format!("  - {id}: {headline}"),
    }
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let written = export_site(&config.site, &args.out)?;
    println!("Exported {} files to {}", written.len(), args.out.display());
    for path in written {
        println!("  - {}", path.display());
    }
    Ok(())
}

/// Writes both pages and the assets under `out`.
///
/// Deferred sections are rendered inline; a static host has no fragment
/// endpoint to fill placeholders from.
pub(crate) fn export_site(site: &SiteConfig, out: &Path) -> Result<Vec<PathBuf>, AppError> {
    let site = SiteConfig {
        defer_sections: false,
        ..site.clone()
    };
    let composer = PageComposer::new(&site);
    let ctx = ComposeContext::new(&site);

    let mut written = Vec::new();
    for route in Route::ordered() {
        let html = composer.compose(route, &ctx)?.render(&ctx)?;
        written.push(write_file(&out.join(route.export_file()), &html)?);
    }
    for asset in assets::all() {
        written.push(write_file(&out.join("assets").join(asset.name), asset.body)?);
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf, AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio::content::catalog;
    use serde_json::json;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-export-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn export_writes_pages_and_assets() {
        let out = scratch_dir("pages");
        let written = export_site(&SiteConfig::default(), &out).expect("export succeeds");
        assert_eq!(written.len(), Route::ordered().len() + assets::all().len());

        let home = fs::read_to_string(out.join("index.html")).expect("home written");
        assert!(home.contains("Selected Publications"));
        assert!(!home.contains("data-fragment="));

        let about = fs::read_to_string(out.join("about/index.html")).expect("about written");
        assert!(about.contains("Return to Portfolio"));
        assert!(out.join("assets/site.js").is_file());

        let _ = fs::remove_dir_all(&out);
    }

    #[test]
    fn exported_home_filters_without_a_server() {
        let out = scratch_dir("tabs");
        export_site(&SiteConfig::default(), &out).expect("export succeeds");
        let home = fs::read_to_string(out.join("index.html")).expect("home written");
        let script = fs::read_to_string(out.join("assets/site.js")).expect("script written");

        // every record a tab could reveal is already on the page
        for id in catalog::projects().iter().map(|p| p.id) {
            assert!(home.contains(&format!("data-id=\"{id}\"")), "project {id}");
        }
        for id in catalog::certifications().iter().map(|c| c.id) {
            assert!(home.contains(&format!("data-id=\"{id}\"")), "credential {id}");
        }
        for id in catalog::testimonials().iter().map(|t| t.id) {
            assert!(home.contains(&format!("data-id=\"{id}\"")), "testimonial {id}");
        }
        assert!(home.contains("role=\"tab\""));
        assert!(!home.contains("data-fragment="));
        assert!(!script.contains("/fragments/\" + section.id"));
        assert!(!script.contains("?category="));

        let _ = fs::remove_dir_all(&out);
    }

    #[test]
    fn json_listing_parses_back_to_the_same_records() {
        let records = Collection::Certifications
            .records(Some("AI"))
            .expect("certifications filter");
        let rendered = render_json(&records).expect("records serialize");
        let parsed: Vec<Value> = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(parsed, records);
    }

    #[test]
    fn summary_line_prefers_title_and_shows_category() {
        let record = json!({ "id": "t3", "author": "Dana Reyes", "category": "leadership" });
        assert_eq!(summary_line(&record), "  - [leadership] t3: Dana Reyes");
        let record = json!({ "id": "edu-1", "degree": "PhD" });
        assert_eq!(summary_line(&record), "  - edu-1: PhD");
    }
}
