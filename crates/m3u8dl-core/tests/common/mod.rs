pub mod playlist_server;
