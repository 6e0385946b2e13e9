mod common;
mod topic_repository_tests;
