use indicatif::{ProgressBar, ProgressStyle};

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    let style = ProgressStyle::with_template(
        " {msg} {pos}/{len} {wide_bar} estimated remaining: {eta_precise}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}
