mod cli_build_agent;
mod cli_list;
