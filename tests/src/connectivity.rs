mod integration;
mod util;
