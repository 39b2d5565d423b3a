//! 产品模块：模型、持久化服务、JSON 接口与页面

pub mod handler;
pub mod model;
pub mod page;
pub mod service;
pub mod view;
