use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

pub(crate) const CONFIG_SAMPLE: &str = r#"[site]
url = "https://primeasure.com"

# For the file locations, If you want it to be relative to the executable directory
# use ${exe_dir}/location
[paths]
root = "."
data_dir = "data"
template_dir = "templates"
blog_dir = "blog"
events_dir = "events"

# Levels: Critical, Error, Warn, Info, Debug, Trace
[log]
level = "Info"
log_to_console = true
# location = "sitegen.log"
"#;

pub(crate) fn write_sample_cfg(file_path: &Path) -> io::Result<()> {
    let mut file = File::create(file_path)?;
    file.write_all(CONFIG_SAMPLE.as_bytes())
}
