mod add_form;
mod all;
mod footer;
mod header;
mod log;
mod task_list;

use self::log::log;
use super::*;
use add_form::add_form;
use footer::footer;
use header::header;
use task_list::task_list;

pub use all::all as render;
