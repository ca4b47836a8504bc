//! 数值字段解析
//!
//! 表示层把文本框的原始内容交给这里，在任何公式执行之前完成拒收：
//! - 空白字段 → 缺少输入
//! - 非数字或非有限值 → 无效数值
//!
//! 错误携带字段名，表示层据此提示哪个输入框有问题。

/// 字段解析错误
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// 必填字段为空
    MissingInput { field: &'static str },
    /// 无法解析为有限数值
    InvalidNumber { field: &'static str, text: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::MissingInput { field } => write!(f, "Field '{}' is required", field),
            InputError::InvalidNumber { field, text } => {
                write!(f, "Field '{}': cannot parse '{}' as a number", field, text)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// 解析必填数值字段
pub fn parse_field(field: &'static str, text: &str) -> Result<f64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::MissingInput { field });
    }
    parse_number(field, text)
}

/// 解析可留空的数值字段，空白时返回默认值
///
/// 原点坐标字段未填写时取 0.0。
pub fn parse_field_or(field: &'static str, text: &str, default: f64) -> Result<f64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(default);
    }
    parse_number(field, text)
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, InputError> {
    let value = text.parse::<f64>().map_err(|_| InputError::InvalidNumber {
        field,
        text: text.to_string(),
    })?;
    // "inf"/"NaN" 能通过 parse，但对几何输入无意义
    if !value.is_finite() {
        return Err(InputError::InvalidNumber {
            field,
            text: text.to_string(),
        });
    }
    Ok(value)
}
