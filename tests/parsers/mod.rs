mod search_result;
