//! Rust LMS - 课程管理后台的学业记录一致性引擎
//!
//! 负责开课时的排课冲突检测、加权成绩汇总和 GPA 计算。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 日志初始化与启动流程
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
