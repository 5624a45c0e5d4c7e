mod init_repository_successfully;
mod init_existing_repository_fails;
