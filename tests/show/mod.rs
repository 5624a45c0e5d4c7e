mod show_file_at_older_commit;
