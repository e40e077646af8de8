//! 核心宏定义
//!
//! 配置结构体大量使用固定默认值，统一用宏生成 `Default` 实现

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use express_fx::impl_default;
///
/// struct Margins {
///     right: f32,
///     bottom: f32,
/// }
///
/// impl_default!(Margins {
///     right: 80.0,
///     bottom: 80.0,
/// });
///
/// assert_eq!(Margins::default().right, 80.0);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}
