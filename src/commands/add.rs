//! Implementation of the link-adding command.

use std::path::{Path, PathBuf};

use crate::{
    commands::ColorChoice,
    config::Config,
    diagnostics::Diagnostics,
    diff::{colorize_diff, unified_diff},
    document::{PostsDocument, heading_for, read_posts},
    error::Result,
    link::LinkEntry,
    palette::{fmt_heading, fmt_link, fmt_path, fmt_subdued},
    paths::{self, display_path},
    publish::{FailurePolicy, Publisher, Step},
};

/// Everything the command line asked for.
#[derive(Debug, Clone)]
pub struct AddRequest {
    /// Link target.
    pub(crate) url: String,
    /// Link label.
    pub(crate) name: String,
    /// Group name without the heading marker.
    pub(crate) group: String,
    /// Commit message for the publish step.
    pub(crate) message: String,
    /// Posts file override, relative to the site root.
    pub(crate) file: Option<String>,
    /// Explicit config file.
    pub(crate) config: Option<PathBuf>,
    /// Positional arguments past the commit message.
    pub(crate) ignored: Vec<String>,
    /// Print the change instead of writing it.
    pub(crate) dry_run: bool,
    /// Whether to stage, commit and push after writing.
    pub(crate) publish: bool,
    /// How publish step failures are handled.
    pub(crate) policy: FailurePolicy,
}

/// What a completed run did.
#[derive(Debug, Default)]
pub struct AddOutcome {
    /// Whether the posts file was rewritten.
    pub(crate) written: bool,
    /// Publish steps that failed and were skipped over.
    pub(crate) failed_steps: Vec<Step>,
}

/// Execute the add command from the current directory.
pub fn run(color: ColorChoice, verbose: bool, request: &AddRequest) -> Result<()> {
    let mut diagnostics = Diagnostics::new(verbose);
    let outcome = execute(request, Path::new("."), color.enabled(), &mut diagnostics)?;
    if !outcome.written {
        diagnostics.note("dry run: posts file left unchanged");
    }
    if !outcome.failed_steps.is_empty() {
        let steps: Vec<String> = outcome.failed_steps.iter().map(ToString::to_string).collect();
        eprintln!("Publish incomplete: {} failed.", steps.join(", "));
    }
    diagnostics.print_warning_summary();
    Ok(())
}

/// Add the link for a site rooted at `site_root`.
pub(crate) fn execute(
    request: &AddRequest,
    site_root: &Path,
    use_color: bool,
    diagnostics: &mut Diagnostics,
) -> Result<AddOutcome> {
    let mut config = Config::load(site_root, request.config.as_deref())?;
    if let Some(file) = &request.file {
        config.set_file(paths::expand_path(file, site_root)?);
    }
    let path = config.file().to_path_buf();
    let label = display_path(&path);
    diagnostics.note(format!("posts file: {label}"));
    if !request.ignored.is_empty() {
        diagnostics.note(format!("ignoring extra arguments: {}", request.ignored.join(" ")));
    }

    let link = LinkEntry::new(request.name.as_str(), request.url.as_str());
    if let Err(message) = link.validate_url() {
        diagnostics.warn(message);
    }
    let link = link.to_string();
    let heading = heading_for(&request.group);

    let original = read_posts(&path)?;
    let mut document = PostsDocument::parse(&original);
    diagnostics.note(format!("parsed {} group(s)", document.groups().len()));
    document.append_link(&request.group, link.as_str());
    let count = document.group(&heading).map_or(0, |group| group.links.len());
    diagnostics.note(format!("{heading} now lists {count} link(s)"));

    let mut outcome = AddOutcome::default();

    if request.dry_run {
        let rendered = document.render(config.front_matter())?;
        let diff = unified_diff(&format!("a/{label}"), &format!("b/{label}"), &original, &rendered);
        print!("{}", colorize_diff(&diff, use_color));
        return Ok(outcome);
    }

    document.write_to(&path, config.front_matter())?;
    outcome.written = true;
    println!(
        "Added {} under {} in {}",
        fmt_link(&link, use_color),
        fmt_heading(&heading, use_color),
        fmt_path(&label, use_color)
    );

    if !request.publish {
        return Ok(outcome);
    }

    println!("{}", fmt_subdued(&request.message, use_color));
    let publisher = Publisher::new(config.git(), config.remote(), site_root)?;
    outcome.failed_steps = publisher.publish(&request.message, request.policy, diagnostics)?;
    Ok(outcome)
}
