// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Log module provides log initialization, reference
//! https://docs.rs/log4rs
//!
//! Messages always go to stderr. When a log file is given they are also
//! appended to it; relative paths resolve against the project root.

use crate::{error::AtlasError, util::get_abs_path};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";
const CONSOLE_PATTERN: &str = "{h({l})} {m}{n}";

/// init logs system
pub fn init_log(level: LevelFilter, file_path: Option<&str>) -> Result<(), AtlasError> {
    let config = build_config(level, file_path)?;
    log4rs::init_config(config).map_err(|e| AtlasError::Log(e.to_string()))?;
    Ok(())
}

fn build_config(level: LevelFilter, file_path: Option<&str>) -> Result<Config, AtlasError> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("console", Box::new(console)),
    );
    let mut root = Root::builder().appender("console");

    if let Some(fp) = file_path {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(get_abs_path(fp))
            .map_err(|e| AtlasError::Log(format!("{}: {}", fp, e)))?;
        builder = builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    builder
        .build(root.build(level))
        .map_err(|e| AtlasError::Log(e.to_string()))
}
