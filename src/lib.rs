/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/5/25
******************************************************************************/

pub mod config;

pub mod constants;

pub mod error;

pub mod application;

pub mod harness;

pub mod presentation;

pub mod session;

pub mod transport;

pub mod utils;
