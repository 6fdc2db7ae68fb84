// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            run / env / base
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   config    StepContext   |
//!              |  TOML, env   mode, root   |
//!              '------+-------------+------'
//!                     |             |
//!                     v             v
//!                  export         inject
//!               env.js from    <base href> in
//!               EnvSnapshot     index.html
//!
//!   +-----------------------------------------+
//!   |  env   snapshot, mode, .env.local       |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod export;
pub mod inject;
pub mod logging;
