use crate::iostreams::ColorScheme;
use crate::model::{Annotation, Job};
use crate::status::{annotation_glyph, Outcome};
use crate::text::{format_duration, fuzzy_ago};
use crate::view::fetch::RunDetails;
use chrono::{DateTime, Utc};

pub struct RenderOptions {
    pub verbose: bool,
    pub now: DateTime<Utc>,
}

pub fn render(details: &RunDetails, opts: &RenderOptions, cs: &ColorScheme) -> String {
    let run = &details.run;
    let outcome = Outcome::classify(run.status, run.final_conclusion());
    let mut lines: Vec<String> = Vec::new();

    lines.push(String::new());
    lines.push(format!(
        "{} {} {} {} {}",
        cs.symbol(outcome),
        cs.bold(&run.head_branch),
        run.display_name(),
        cs.separator(),
        cs.cyan(&run.id.to_string())
    ));

    let ago = fuzzy_ago(opts.now - run.created_at);
    if run.is_completed() {
        lines.push(format!("Triggered via {} {ago}", run.event));
    } else {
        lines.push(format!("Triggered via {} {ago}, still in progress", run.event));
    }
    if let Some(pr) = details.pull_request {
        lines.push(format!("Pull request {}", cs.cyan(&format!("#{}", pr.number))));
    }
    lines.push(String::new());

    if details.jobs.is_empty() && run.is_failure() {
        lines.push(format!(
            "{} {}",
            cs.failure_icon(),
            cs.bold("This run likely failed because of a workflow file issue.")
        ));
        lines.push(String::new());
        lines.push(format!("For more information, see: {}", cs.bold(&run.url)));
        return finish(lines);
    }

    lines.push(cs.bold("JOBS"));
    for job in &details.jobs {
        render_job(&mut lines, job, details.annotations_for(job), opts, cs);
    }

    lines.push(String::new());
    lines.push("For more information about a job, try: gh job view <job-id>".to_string());
    lines.push(cs.gray(&format!("view this run on GitHub: {}", run.url)));
    finish(lines)
}

fn render_job(
    lines: &mut Vec<String>,
    job: &Job,
    annotations: &[Annotation],
    opts: &RenderOptions,
    cs: &ColorScheme,
) {
    let outcome = Outcome::classify(job.status, job.conclusion);
    let mut line = format!(
        "{} {} (ID {})",
        cs.symbol(outcome),
        job.name,
        cs.cyan(&job.id.to_string())
    );
    if opts.verbose {
        if let Some(elapsed) = job.elapsed() {
            line.push_str(&format!(" in {}", format_duration(elapsed)));
        }
    }
    lines.push(line);

    let failed = job.is_failure();
    if opts.verbose || failed {
        for step in &job.steps {
            let step_outcome = Outcome::classify(step.status, step.conclusion);
            lines.push(format!("  {} {}", cs.symbol(step_outcome), step.name));
        }
    }

    if failed {
        for a in annotations {
            let (glyph, tone) = annotation_glyph(a.level);
            lines.push(format!("  {} {}", cs.tone(tone, glyph), a.message));
            if let Some(location) = annotation_location(a) {
                lines.push(cs.gray(&format!("    {location}")));
            }
        }
    }
}

fn annotation_location(a: &Annotation) -> Option<String> {
    if a.path.is_empty() {
        return None;
    }
    let mut location = a.path.clone();
    if let Some(line) = a.start_line {
        location.push_str(&format!("#{line}"));
        if let Some(col) = a.start_column {
            location.push_str(&format!(":{col}"));
        }
    }
    Some(location)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
