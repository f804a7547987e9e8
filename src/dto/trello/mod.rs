pub mod trello_list;
