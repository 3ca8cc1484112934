/// 目录推荐默认返回条数
pub const DEFAULT_RECOMMEND_COUNT: usize = 3;

/// 单次请求允许的最大推荐条数
pub const MAX_RECOMMEND_COUNT: usize = 50;

/// 规则推荐打乱后保留的条数
pub const DEFAULT_RECOMMEND_LIMIT: usize = 4;

/// 单次画像分析允许的最大测验/活动记录数
pub const MAX_HISTORY_RECORDS: usize = 10_000;

/// 默认服务端口
pub const DEFAULT_PORT: u16 = 8000;

/// 默认允许的跨域来源
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";
