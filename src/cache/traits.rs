use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 未命中
    NotFound,
    /// 键存在但无法取值（例如后端连接失败）
    ExistsButNoValue,
}

/// 对象缓存后端需要实现的接口
///
/// 值以 JSON 字符串形式存取，序列化由调用方负责，
/// 保证 trait 对象安全。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// ttl 为 0 时使用后端的默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);
}
