//! 对象缓存抽象层
//!
//! 通过 ctor 注册的插件机制支持多种缓存后端（内存 moka / redis），
//! 具体使用哪个后端由配置中的 `cache.type` 决定。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并自动注册一个对象缓存插件
///
/// 在模块加载时（main 之前）将构造函数注册到全局注册表，
/// 运行时按名称查找并实例化。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $type:ty) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_plugin_ $type:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            <$type>::new()
                                .map(|cache| {
                                    Box::new(cache) as Box<dyn $crate::cache::ObjectCache>
                                })
                                .map_err($crate::errors::GradebookError::CacheConnection)
                        })
                    }),
                );
            }
        }
    };
}
