use crate::common::*;

/* Rotate the report log once it reaches ~500 KB, keeping three old files. */
const LOG_FILE_BASENAME: &str = "reports";
const LOG_ROTATE_SIZE_BYTES: u64 = 500_000;
const LOG_BACKUP_COUNT: usize = 3;

#[doc = "`2024-01-08 09:00:00 | INFO    : message`"]
fn report_log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} | {:<8}: {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.args()
    )
}

#[doc = r#"
    Builds the process logger: a size-rotated file under `log_dir` duplicated to stderr.

    The level defaults to `info` and can be overridden with `RUST_LOG`.
    The returned handle owns the logger backend and must be kept alive by the caller
    for as long as log output is wanted; dropping it flushes and shuts the writer down.

    # Arguments
    * `log_dir` - directory that receives `reports_rCURRENT.log` and its rotated siblings

    # Returns
    * `anyhow::Result<LoggerHandle>`
"#]
pub fn init_logger(log_dir: &Path) -> anyhow::Result<LoggerHandle> {
    let handle: LoggerHandle = Logger::try_with_env_or_str("info")
        .context("[logger_utils->init_logger] invalid log specification")?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME)
                .suffix("log"),
        )
        .rotate(
            Criterion::Size(LOG_ROTATE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_BACKUP_COUNT),
        )
        .duplicate_to_stderr(Duplicate::All)
        .format(report_log_format)
        .start()
        .context("[logger_utils->init_logger] failed to start logger")?;

    Ok(handle)
}
