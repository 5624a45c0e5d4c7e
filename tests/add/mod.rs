mod adding_same_file_twice_keeps_one_entry;
