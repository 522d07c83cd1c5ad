//! `linkdispatch classify` – classify one URL.

use anyhow::Result;
use linkdispatch_core::{classify, ClassifiedLink, DispatchContext, LaunchState, LinkSource};

pub fn run_classify(url: &str, source: LinkSource, cold_start: bool, json: bool) -> Result<()> {
    let launch = if cold_start {
        LaunchState::ColdStart
    } else {
        LaunchState::Running
    };
    let out = classify(url, DispatchContext::new(source, launch));
    if json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_line(&out));
    }
    Ok(())
}

/// Human-readable single line: `<category> key=value ...`.
pub fn format_line(out: &ClassifiedLink) -> String {
    let mut line = out.category().to_string();
    for (name, value) in out.parameters() {
        line.push(' ');
        line.push_str(name);
        line.push('=');
        line.push_str(&value);
    }
    line
}
