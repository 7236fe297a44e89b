//! 捕获日志的测试 logger
//!
//! 把 `log` 门面输出的记录保存在内存中，供测试断言诊断信息是否产生。
//! 测试是并行运行的，断言时应使用带唯一标识的子串过滤。

use std::sync::{Mutex, Once};

use log::{LevelFilter, Log, Metadata, Record};

/// 捕获到的一条日志
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: log::Level,
    pub target: String,
    pub message: String,
}

/// 捕获所有级别日志的 logger
pub struct CaptureLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl CaptureLogger {
    const fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push(CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger::new();
static INIT: Once = Once::new();

/// 安装捕获 logger；重复调用是安全的
pub fn init() {
    INIT.call_once(|| {
        // 其它测试二进制可能已经安装了自己的 logger
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

/// 返回消息中包含 `needle` 的记录
pub fn records_containing(needle: &str) -> Vec<CapturedRecord> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|record| record.message.contains(needle))
        .cloned()
        .collect()
}
