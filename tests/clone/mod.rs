mod clone_repository_successfully;
