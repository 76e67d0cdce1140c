//! # Commands Module / 命令模块
//!
//! The actions the command-line interface can perform.
//!
//! 命令行接口可以执行的操作。

pub mod compose;
